//! 用户角色模块
//!
//! 平台参与者的封闭枚举。所有展示文案、徽章样式、推荐关系都通过
//! 穷尽匹配实现：新增角色时编译器会强制补全每一处。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 平台用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Mentor,
    #[default]
    Mentee,
    Investor,
    ServiceProvider,
    Cofounder,
}

impl UserRole {
    /// 全部角色，按注册表单中的展示顺序
    pub const ALL: [UserRole; 5] = [
        UserRole::Mentor,
        UserRole::Mentee,
        UserRole::Investor,
        UserRole::ServiceProvider,
        UserRole::Cofounder,
    ];

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Mentor => "Mentor",
            UserRole::Mentee => "Mentee",
            UserRole::Investor => "Investor",
            UserRole::ServiceProvider => "Service Provider",
            UserRole::Cofounder => "Co-founder",
        }
    }

    /// URL / 存储中使用的标识符，与 serde 的 snake_case 命名一致
    pub fn slug(&self) -> &'static str {
        match self {
            UserRole::Mentor => "mentor",
            UserRole::Mentee => "mentee",
            UserRole::Investor => "investor",
            UserRole::ServiceProvider => "service_provider",
            UserRole::Cofounder => "cofounder",
        }
    }

    /// 从标识符解析角色
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == slug)
    }

    /// 首页功能区的一句话介绍
    pub fn tagline(&self) -> &'static str {
        match self {
            UserRole::Mentor => "Share hard-won lessons with the next wave of founders.",
            UserRole::Mentee => "Get guidance from people who have built before you.",
            UserRole::Investor => "Discover early-stage teams before anyone else.",
            UserRole::ServiceProvider => "Offer legal, design or engineering services to startups.",
            UserRole::Cofounder => "Find the missing half of your founding team.",
        }
    }

    /// 角色徽章的 daisyUI 配色
    pub fn badge_class(&self) -> &'static str {
        match self {
            UserRole::Mentor => "badge badge-primary",
            UserRole::Mentee => "badge badge-accent",
            UserRole::Investor => "badge badge-secondary",
            UserRole::ServiceProvider => "badge badge-info",
            UserRole::Cofounder => "badge badge-warning",
        }
    }

    /// 控制台页面标题
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            UserRole::Mentor => "导师控制台",
            UserRole::Mentee => "学员控制台",
            UserRole::Investor => "投资人控制台",
            UserRole::ServiceProvider => "服务商控制台",
            UserRole::Cofounder => "联合创始人控制台",
        }
    }

    /// 控制台推荐的互补角色
    ///
    /// 推荐列表从通讯录中按这些角色过滤得到。
    pub fn suggested_roles(&self) -> &'static [UserRole] {
        match self {
            UserRole::Mentor => &[UserRole::Mentee],
            UserRole::Mentee => &[UserRole::Mentor, UserRole::ServiceProvider],
            UserRole::Investor => &[UserRole::Cofounder, UserRole::Mentee],
            UserRole::ServiceProvider => &[UserRole::Mentee, UserRole::Cofounder],
            UserRole::Cofounder => &[UserRole::Cofounder, UserRole::Investor],
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips_for_every_role() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_slug(role.slug()), Some(role));
        }
        assert_eq!(UserRole::from_slug("astronaut"), None);
    }

    #[test]
    fn serde_uses_snake_case_slugs() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.slug()));
            let back: UserRole = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(UserRole::ServiceProvider.label(), "Service Provider");
        assert_eq!(UserRole::Cofounder.to_string(), "Co-founder");
    }

    #[test]
    fn suggestions_never_point_back_to_an_empty_list() {
        for role in UserRole::ALL {
            assert!(!role.suggested_roles().is_empty());
        }
    }
}
