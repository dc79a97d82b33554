use super::*;
use crate::mock::mock_users;

fn names(profiles: &[UserProfile]) -> Vec<&str> {
    profiles.iter().map(|p| p.name.as_str()).collect()
}

fn query(q: &str) -> SearchFilter {
    SearchFilter {
        query: q.to_string(),
        ..SearchFilter::default()
    }
}

/// A profile with every optional dimension left empty.
fn blank_profile() -> UserProfile {
    UserProfile {
        id: "u-blank".to_string(),
        name: "Blank Slate".to_string(),
        role: UserRole::Mentee,
        avatar: String::new(),
        bio: String::new(),
        expertise: Vec::new(),
        location: String::new(),
        connections: 0,
        industry: String::new(),
        experience: String::new(),
        rating: 0.0,
    }
}

#[test]
fn unconstrained_filter_returns_everything_in_order() {
    let users = mock_users();
    let filter = SearchFilter::default();
    assert!(filter.is_unconstrained());
    assert_eq!(filter.apply(&users), users);
}

#[test]
fn query_matches_name_case_insensitively() {
    let users = mock_users();
    assert_eq!(names(&query("aLeX mOr").apply(&users)), vec!["Alex Morgan"]);
}

#[test]
fn query_matches_bio_substring() {
    let users = mock_users();
    assert_eq!(names(&query("health app").apply(&users)), vec!["Priya Sharma"]);
}

#[test]
fn query_matches_expertise_entries() {
    let users = mock_users();
    assert_eq!(names(&query("devops").apply(&users)), vec!["Marcus Reed"]);
}

#[test]
fn blank_query_is_no_constraint() {
    let users = mock_users();
    assert_eq!(query("   ").apply(&users).len(), users.len());
}

// 字面场景：查询 "fundrais" 只命中 expertise 含 "Fundraising" 的 Alex Morgan；
// David Chen 的 "Seed Funding" 和 bio 均不含该子串。
#[test]
fn fundrais_query_hits_exactly_alex_morgan() {
    let users = mock_users();
    assert_eq!(names(&query("fundrais").apply(&users)), vec!["Alex Morgan"]);
}

// 字面场景：角色筛选 {mentor, investor} 恰好命中两条记录。
#[test]
fn mentor_and_investor_roles_hit_exactly_two_profiles() {
    let users = mock_users();
    let filter = SearchFilter {
        roles: vec![UserRole::Mentor, UserRole::Investor],
        ..SearchFilter::default()
    };
    assert_eq!(names(&filter.apply(&users)), vec!["Alex Morgan", "David Chen"]);
}

#[test]
fn dimensions_combine_with_and() {
    let users = mock_users();
    let matching = SearchFilter {
        query: "seed".to_string(),
        roles: vec![UserRole::Investor],
        ..SearchFilter::default()
    };
    assert_eq!(names(&matching.apply(&users)), vec!["David Chen"]);

    // 同一个查询串换一个角色维度后交集为空
    let conflicting = SearchFilter {
        query: "seed".to_string(),
        roles: vec![UserRole::Mentor],
        ..SearchFilter::default()
    };
    assert!(conflicting.apply(&users).is_empty());
}

#[test]
fn values_within_a_dimension_combine_with_or() {
    let users = mock_users();
    let filter = SearchFilter {
        expertise: vec!["Fundraising".to_string(), "Startup Law".to_string()],
        ..SearchFilter::default()
    };
    assert_eq!(
        names(&filter.apply(&users)),
        vec!["Alex Morgan", "Elena Petrova"]
    );
}

#[test]
fn exact_match_dimensions() {
    let users = mock_users();
    let by_experience = SearchFilter {
        experience: Some("8 years".to_string()),
        ..SearchFilter::default()
    };
    assert_eq!(names(&by_experience.apply(&users)), vec!["David Chen"]);

    let by_location = SearchFilter {
        location: Some("London, UK".to_string()),
        ..SearchFilter::default()
    };
    assert_eq!(names(&by_location.apply(&users)), vec!["Elena Petrova"]);

    // 精确维度不做子串匹配
    let partial = SearchFilter {
        location: Some("London".to_string()),
        ..SearchFilter::default()
    };
    assert!(partial.apply(&users).is_empty());
}

#[test]
fn absent_fields_never_match_an_active_dimension() {
    let mut users = mock_users();
    users.push(blank_profile());

    let by_expertise = SearchFilter {
        expertise: vec!["Fundraising".to_string()],
        ..SearchFilter::default()
    };
    assert!(!by_expertise.apply(&users).iter().any(|p| p.id == "u-blank"));

    // 维度未激活时空档案照常通过
    assert!(
        SearchFilter::default()
            .apply(&users)
            .iter()
            .any(|p| p.id == "u-blank")
    );
}

// =========================================================
// 排序
// =========================================================

#[test]
fn relevance_preserves_filtered_order() {
    let mut results = mock_users();
    let before = results.clone();
    SortKey::Relevance.apply(&mut results);
    assert_eq!(results, before);
}

#[test]
fn connections_sorts_descending() {
    let mut results = mock_users();
    SortKey::Connections.apply(&mut results);
    let counts: Vec<u32> = results.iter().map(|p| p.connections).collect();
    assert_eq!(counts, vec![412, 389, 245, 133, 57]);
}

#[test]
fn rating_sorts_descending() {
    let mut results = mock_users();
    SortKey::Rating.apply(&mut results);
    assert_eq!(
        names(&results),
        vec![
            "Alex Morgan",
            "Elena Petrova",
            "David Chen",
            "Marcus Reed",
            "Priya Sharma"
        ]
    );
}

#[test]
fn name_sorts_ascending() {
    let mut results = mock_users();
    SortKey::Name.apply(&mut results);
    assert_eq!(
        names(&results),
        vec![
            "Alex Morgan",
            "David Chen",
            "Elena Petrova",
            "Marcus Reed",
            "Priya Sharma"
        ]
    );
}

#[test]
fn equal_sort_keys_keep_relative_order() {
    let mut a = blank_profile();
    a.id = "u-a".to_string();
    a.connections = 10;
    let mut b = blank_profile();
    b.id = "u-b".to_string();
    b.connections = 10;

    let mut results = vec![a.clone(), b.clone()];
    SortKey::Connections.apply(&mut results);
    assert_eq!(results[0].id, "u-a");
    assert_eq!(results[1].id, "u-b");
}

#[test]
fn sort_slug_round_trips_and_falls_back() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::from_slug(key.slug()), key);
    }
    assert_eq!(SortKey::from_slug("bogus"), SortKey::Relevance);
}
