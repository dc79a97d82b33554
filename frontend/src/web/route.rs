//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 营销首页 (默认路由)
    #[default]
    Home,
    /// 通讯录搜索
    Search,
    /// 社区信息流
    Community,
    /// 知识库
    KnowledgeHub,
    /// 控制台 (需要认证)
    Dashboard,
    /// 个人档案 (需要认证)
    Profile,
    /// 档案详情，携带档案 id
    ProfileView(String),
    /// 登录 / 注册，`signup` 决定初始标签页
    Auth { signup: bool },
    /// 收藏列表 (需要认证)
    Wishlist,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 构造登录 / 注册路由
    pub fn auth(signup: bool) -> Self {
        Self::Auth { signup }
    }

    /// 将 URL path（可携带查询串）解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path, ""),
        };
        let path = path.trim_end_matches('/');

        match path {
            "" => Self::Home,
            "/search" => Self::Search,
            "/community" => Self::Community,
            "/knowledge-hub" => Self::KnowledgeHub,
            "/dashboard" => Self::Dashboard,
            "/profile" => Self::Profile,
            "/auth" => Self::Auth {
                signup: query.split('&').any(|pair| pair == "signup=true"),
            },
            "/wishlist" => Self::Wishlist,
            _ => match path.strip_prefix("/profiles/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::ProfileView(id.to_string())
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Search => "/search".to_string(),
            Self::Community => "/community".to_string(),
            Self::KnowledgeHub => "/knowledge-hub".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::ProfileView(id) => format!("/profiles/{}", id),
            Self::Auth { signup: true } => "/auth?signup=true".to_string(),
            Self::Auth { signup: false } => "/auth".to_string(),
            Self::Wishlist => "/wishlist".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Profile | Self::Wishlist)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Auth { signup: false }
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_fixed_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/search"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/community"), AppRoute::Community);
        assert_eq!(AppRoute::from_path("/knowledge-hub"), AppRoute::KnowledgeHub);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
        assert_eq!(AppRoute::from_path("/wishlist"), AppRoute::Wishlist);
    }

    #[test]
    fn parses_profile_ids() {
        assert_eq!(
            AppRoute::from_path("/profiles/u-3"),
            AppRoute::ProfileView("u-3".to_string())
        );
        // 空 id 或多级路径都按未找到处理
        assert_eq!(AppRoute::from_path("/profiles/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/profiles/u-3/edit"), AppRoute::NotFound);
    }

    #[test]
    fn parses_the_signup_query() {
        assert_eq!(
            AppRoute::from_path("/auth"),
            AppRoute::Auth { signup: false }
        );
        assert_eq!(
            AppRoute::from_path("/auth?signup=true"),
            AppRoute::Auth { signup: true }
        );
        assert_eq!(
            AppRoute::from_path("/auth?ref=home&signup=true"),
            AppRoute::Auth { signup: true }
        );
        assert_eq!(
            AppRoute::from_path("/auth?signup=false"),
            AppRoute::Auth { signup: false }
        );
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(AppRoute::from_path("/search/"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/billing"), AppRoute::NotFound);
    }

    #[test]
    fn path_round_trip_for_navigable_routes() {
        let routes = [
            AppRoute::Home,
            AppRoute::Search,
            AppRoute::Community,
            AppRoute::KnowledgeHub,
            AppRoute::Dashboard,
            AppRoute::Profile,
            AppRoute::ProfileView("u-1".to_string()),
            AppRoute::Auth { signup: false },
            AppRoute::Auth { signup: true },
            AppRoute::Wishlist,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn guard_flags() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(AppRoute::Wishlist.requires_auth());
        assert!(!AppRoute::Search.requires_auth());
        assert!(!AppRoute::ProfileView("u-1".to_string()).requires_auth());
        assert!(AppRoute::auth(true).should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
