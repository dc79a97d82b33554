//! 内置示例数据
//!
//! 没有后端，整站的数据源就是这里的硬编码记录。
//! 过滤与控制台的测试断言直接依赖这些字面值，改动内容时需同步测试。

use crate::{Post, Resource, Timestamp, UserProfile, UserRole};
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(3600);
const DAY: Duration = Duration::from_secs(86_400);

/// 通讯录的全部档案
pub fn mock_users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "u-1".to_string(),
            name: "Alex Morgan".to_string(),
            role: UserRole::Mentor,
            avatar: "https://i.pravatar.cc/150?img=12".to_string(),
            bio: "Serial entrepreneur turned mentor. Took two SaaS startups from zero to exit."
                .to_string(),
            expertise: vec![
                "Fundraising".to_string(),
                "Product Strategy".to_string(),
                "Go-to-Market".to_string(),
            ],
            location: "San Francisco, CA".to_string(),
            connections: 412,
            industry: "SaaS".to_string(),
            experience: "10+ years".to_string(),
            rating: 4.9,
        },
        UserProfile {
            id: "u-2".to_string(),
            name: "David Chen".to_string(),
            role: UserRole::Investor,
            avatar: "https://i.pravatar.cc/150?img=33".to_string(),
            bio: "Early-stage investor backing pre-seed and seed teams across fintech and dev tools."
                .to_string(),
            expertise: vec![
                "Seed Funding".to_string(),
                "Venture Capital".to_string(),
                "Financial Modeling".to_string(),
            ],
            location: "New York, NY".to_string(),
            connections: 389,
            industry: "Fintech".to_string(),
            experience: "8 years".to_string(),
            rating: 4.7,
        },
        UserProfile {
            id: "u-3".to_string(),
            name: "Priya Sharma".to_string(),
            role: UserRole::Mentee,
            avatar: "https://i.pravatar.cc/150?img=47".to_string(),
            bio: "First-time founder building a consumer health app, looking for product guidance."
                .to_string(),
            expertise: vec![
                "Product Management".to_string(),
                "UX Research".to_string(),
            ],
            location: "Bengaluru, India".to_string(),
            connections: 57,
            industry: "HealthTech".to_string(),
            experience: "2 years".to_string(),
            rating: 4.5,
        },
        UserProfile {
            id: "u-4".to_string(),
            name: "Marcus Reed".to_string(),
            role: UserRole::Cofounder,
            avatar: "https://i.pravatar.cc/150?img=56".to_string(),
            bio: "CTO-type looking to join an ambitious early-stage team as technical cofounder."
                .to_string(),
            expertise: vec![
                "Backend Engineering".to_string(),
                "DevOps".to_string(),
                "System Design".to_string(),
            ],
            location: "Berlin, Germany".to_string(),
            connections: 133,
            industry: "Developer Tools".to_string(),
            experience: "7 years".to_string(),
            rating: 4.6,
        },
        UserProfile {
            id: "u-5".to_string(),
            name: "Elena Petrova".to_string(),
            role: UserRole::ServiceProvider,
            avatar: "https://i.pravatar.cc/150?img=25".to_string(),
            bio: "Startup attorney helping founders incorporate, close rounds, and stay compliant."
                .to_string(),
            expertise: vec![
                "Startup Law".to_string(),
                "Contracts".to_string(),
                "Incorporation".to_string(),
            ],
            location: "London, UK".to_string(),
            connections: 245,
            industry: "Legal Services".to_string(),
            experience: "12 years".to_string(),
            rating: 4.8,
        },
    ]
}

/// 按 id 查找档案
pub fn mock_user(id: &str) -> Option<UserProfile> {
    mock_users().into_iter().find(|p| p.id == id)
}

/// 社区信息流
///
/// 发帖时间以调用方传入的 `now` 为基准倒推，保证相对时间展示始终新鲜。
pub fn mock_posts(now: Timestamp) -> Vec<Post> {
    let users = mock_users();
    vec![
        Post {
            id: "p-1".to_string(),
            author: users[0].clone(),
            title: "What I wish I knew before my first fundraise".to_string(),
            content: "Your deck matters less than your pipeline. I spent six weeks polishing \
                      slides and two days building an investor list, and it should have been \
                      the other way around. Happy to review outreach lists in the comments."
                .to_string(),
            likes: 48,
            comments: 12,
            created_at: now - HOUR * 2,
            tags: vec!["fundraising".to_string(), "lessons".to_string()],
        },
        Post {
            id: "p-2".to_string(),
            author: users[2].clone(),
            title: "Looking for beta testers for our health tracking app".to_string(),
            content: "We just shipped our first TestFlight build. If you track sleep or \
                      nutrition and can spare ten minutes a week, I would love your feedback."
                .to_string(),
            likes: 21,
            comments: 8,
            created_at: now - HOUR * 5,
            tags: vec!["product".to_string(), "feedback".to_string()],
        },
        Post {
            id: "p-3".to_string(),
            author: users[1].clone(),
            title: "Three patterns I keep seeing in pre-seed decks".to_string(),
            content: "1) Market slides that describe a market, not a wedge. 2) Teams that \
                      list advisors before customers. 3) No mention of distribution at all. \
                      Fix these and you are ahead of most of my inbox."
                .to_string(),
            likes: 95,
            comments: 31,
            created_at: now - DAY,
            tags: vec!["fundraising".to_string(), "investing".to_string()],
        },
        Post {
            id: "p-4".to_string(),
            author: users[3].clone(),
            title: "How we cut our infra bill by 60% in a weekend".to_string(),
            content: "Mostly boring work: right-sizing instances, deleting zombie volumes, \
                      and moving logs to cold storage. Write-up with numbers in the thread."
                .to_string(),
            likes: 33,
            comments: 9,
            created_at: now - DAY * 3,
            tags: vec!["engineering".to_string(), "devops".to_string()],
        },
    ]
}

/// 知识库条目
pub fn mock_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "r-1".to_string(),
            title: "The Pre-seed Playbook".to_string(),
            category: "Fundraising".to_string(),
            summary: "How much to raise, from whom, and what to promise at the earliest stage."
                .to_string(),
            read_minutes: 12,
        },
        Resource {
            id: "r-2".to_string(),
            title: "Writing a One-pager Investors Actually Read".to_string(),
            category: "Fundraising".to_string(),
            summary: "Structure, length and the three numbers that belong above the fold."
                .to_string(),
            read_minutes: 6,
        },
        Resource {
            id: "r-3".to_string(),
            title: "Signals of Product-Market Fit".to_string(),
            category: "Product".to_string(),
            summary: "Retention curves, organic pull and the difference between polite and \
                      desperate users."
                .to_string(),
            read_minutes: 9,
        },
        Resource {
            id: "r-4".to_string(),
            title: "Pricing Your First SaaS Tier".to_string(),
            category: "Product".to_string(),
            summary: "Why your first price is wrong and how to be wrong in the right direction."
                .to_string(),
            read_minutes: 7,
        },
        Resource {
            id: "r-5".to_string(),
            title: "Cold Outreach That Converts".to_string(),
            category: "Growth".to_string(),
            summary: "Templates are a trap; relevance is the channel. Worked examples inside."
                .to_string(),
            read_minutes: 5,
        },
        Resource {
            id: "r-6".to_string(),
            title: "Incorporation Checklist for Founders".to_string(),
            category: "Legal".to_string(),
            summary: "Entities, vesting, 83(b) elections and the paperwork people regret skipping."
                .to_string(),
            read_minutes: 8,
        },
    ]
}

/// 知识库分类，按首次出现顺序去重
pub fn resource_categories() -> Vec<String> {
    let mut seen = Vec::new();
    for resource in mock_resources() {
        if !seen.contains(&resource.category) {
            seen.push(resource.category);
        }
    }
    seen
}

/// 档案某个字符串字段的去重取值，按首次出现顺序，用于筛选面板的选项
fn distinct_values(extract: impl Fn(&UserProfile) -> Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for profile in mock_users() {
        for value in extract(&profile) {
            if !value.is_empty() && !seen.contains(&value) {
                seen.push(value);
            }
        }
    }
    seen
}

/// 筛选面板的专长选项
pub fn expertise_options() -> Vec<String> {
    distinct_values(|p| p.expertise.clone())
}

/// 筛选面板的行业选项
pub fn industry_options() -> Vec<String> {
    distinct_values(|p| vec![p.industry.clone()])
}

/// 筛选面板的经验水平选项
pub fn experience_options() -> Vec<String> {
    distinct_values(|p| vec![p.experience.clone()])
}

/// 筛选面板的所在地选项
pub fn location_options() -> Vec<String> {
    distinct_values(|p| vec![p.location.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_five_distinct_profiles() {
        let users = mock_users();
        assert_eq!(users.len(), 5);
        for (i, a) in users.iter().enumerate() {
            for b in &users[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_role_appears_exactly_once() {
        let users = mock_users();
        for role in UserRole::ALL {
            assert_eq!(users.iter().filter(|p| p.role == role).count(), 1);
        }
    }

    #[test]
    fn ratings_stay_on_the_five_point_scale() {
        for user in mock_users() {
            assert!(user.rating >= 0.0 && user.rating <= 5.0, "{}", user.name);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(mock_user("u-2").map(|p| p.name), Some("David Chen".to_string()));
        assert_eq!(mock_user("u-999"), None);
    }

    #[test]
    fn posts_are_dated_relative_to_now() {
        let now = Timestamp::new(1_756_000_000_000);
        let posts = mock_posts(now);
        assert!(!posts.is_empty());
        for post in &posts {
            assert!(post.created_at < now);
        }
    }

    #[test]
    fn filter_options_are_deduplicated() {
        let industries = industry_options();
        let mut unique = industries.clone();
        unique.dedup();
        assert_eq!(industries, unique);
        assert_eq!(resource_categories().len(), 4);
    }
}
