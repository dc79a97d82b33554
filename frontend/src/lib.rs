//! FounderNet 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth` / `wishlist` / `notify`: 应用级状态
//! - `api`: 模拟后端（延迟 + 伪造记录）
//! - `components`: UI 组件层

mod api;
mod auth;
mod notify;
mod wishlist;
mod components {
    pub mod auth_page;
    pub mod community;
    mod connection_history;
    pub mod dashboard;
    mod footer;
    pub mod home;
    mod icons;
    pub mod knowledge_hub;
    mod navbar;
    mod post_card;
    pub mod profile;
    mod profile_card;
    pub mod profile_view;
    pub mod search;
    pub mod wishlist_page;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::auth_page::AuthPage;
use crate::components::community::CommunityPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::knowledge_hub::KnowledgeHubPage;
use crate::components::profile::ProfilePage;
use crate::components::profile_view::ProfileViewPage;
use crate::components::search::SearchPage;
use crate::components::wishlist_page::WishlistPage;
use crate::notify::{NotifyContext, ToastHost};
use crate::wishlist::{WishlistContext, init_wishlist};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 所有 web_sys 调用都集中在这里。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::{now, sleep};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::Community => view! { <CommunityPage /> }.into_any(),
        AppRoute::KnowledgeHub => view! { <KnowledgeHubPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::ProfileView(id) => view! { <ProfileViewPage id=id /> }.into_any(),
        AppRoute::Auth { signup } => view! { <AuthPage signup_first=signup /> }.into_any(),
        AppRoute::Wishlist => view! { <WishlistPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用级上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    let wishlist_ctx = WishlistContext::new();
    provide_context(wishlist_ctx);
    let notify_ctx = NotifyContext::new();
    provide_context(notify_ctx);

    // 2. 从 LocalStorage 水合持久化状态（会话 + 收藏）
    init_auth(&auth_ctx);
    init_wishlist(&wishlist_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
