//! 通讯录过滤模块
//!
//! 对内存中的档案列表做同步过滤：各过滤维度之间取 AND，
//! 单个维度内的多选值之间取 OR。输出保持输入顺序，
//! 排序作为独立的后置步骤由 [`SortKey`] 完成。

use crate::{UserProfile, UserRole};

#[cfg(test)]
mod tests;

/// 一次查询的全部筛选条件
///
/// 所有字段均可缺省：空集合 / `None` / 空查询串表示该维度不设约束。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// 自由文本查询，大小写不敏感的子串匹配
    pub query: String,
    /// 角色多选
    pub roles: Vec<UserRole>,
    /// 专长多选，与档案的 expertise 求交集
    pub expertise: Vec<String>,
    /// 行业多选
    pub industries: Vec<String>,
    /// 经验水平，精确匹配
    pub experience: Option<String>,
    /// 所在地，精确匹配
    pub location: Option<String>,
}

impl SearchFilter {
    /// 是否未设置任何约束
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.roles.is_empty()
            && self.expertise.is_empty()
            && self.industries.is_empty()
            && self.experience.is_none()
            && self.location.is_none()
    }

    /// 判断单个档案是否通过全部激活的维度
    pub fn matches(&self, profile: &UserProfile) -> bool {
        self.matches_query(profile)
            && self.matches_roles(profile)
            && self.matches_expertise(profile)
            && self.matches_industries(profile)
            && self.matches_experience(profile)
            && self.matches_location(profile)
    }

    /// 过滤整个列表，保持输入顺序
    pub fn apply(&self, profiles: &[UserProfile]) -> Vec<UserProfile> {
        profiles
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }

    /// 查询串对 name / bio / 每条 expertise 做大小写不敏感子串匹配
    fn matches_query(&self, profile: &UserProfile) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        profile.name.to_lowercase().contains(&needle)
            || profile.bio.to_lowercase().contains(&needle)
            || profile
                .expertise
                .iter()
                .any(|term| term.to_lowercase().contains(&needle))
    }

    fn matches_roles(&self, profile: &UserProfile) -> bool {
        self.roles.is_empty() || self.roles.contains(&profile.role)
    }

    /// 档案缺失 expertise（空列表）时，该维度按不匹配处理
    fn matches_expertise(&self, profile: &UserProfile) -> bool {
        self.expertise.is_empty()
            || profile
                .expertise
                .iter()
                .any(|term| self.expertise.iter().any(|selected| selected == term))
    }

    fn matches_industries(&self, profile: &UserProfile) -> bool {
        self.industries.is_empty() || self.industries.contains(&profile.industry)
    }

    fn matches_experience(&self, profile: &UserProfile) -> bool {
        match &self.experience {
            None => true,
            Some(level) => profile.experience == *level,
        }
    }

    fn matches_location(&self, profile: &UserProfile) -> bool {
        match &self.location {
            None => true,
            Some(loc) => profile.location == *loc,
        }
    }
}

// =========================================================
// 排序
// =========================================================

/// 搜索结果排序方式
///
/// `Relevance` 保持过滤后的原始顺序；其余均为稳定排序，
/// 相等元素之间不改变相对位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Connections,
    Rating,
    Name,
}

impl SortKey {
    /// 全部排序方式，按下拉框中的展示顺序
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Connections,
        SortKey::Rating,
        SortKey::Name,
    ];

    /// 下拉框展示文案
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Connections => "Most connections",
            SortKey::Rating => "Top rated",
            SortKey::Name => "Name A-Z",
        }
    }

    /// 下拉框 option 的 value
    pub fn slug(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Connections => "connections",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    /// 从 option value 解析，未知值回落到默认排序
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.slug() == slug)
            .unwrap_or_default()
    }

    /// 就地排序
    pub fn apply(&self, profiles: &mut [UserProfile]) {
        match self {
            SortKey::Relevance => {}
            SortKey::Connections => {
                profiles.sort_by(|a, b| b.connections.cmp(&a.connections));
            }
            SortKey::Rating => {
                profiles.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortKey::Name => {
                profiles.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
    }
}
