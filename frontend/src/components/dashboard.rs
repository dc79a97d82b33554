//! 控制台页面
//!
//! 内容随角色切换：统计卡、互补角色推荐、最近动态。
//! 路由守卫之外再用 Effect 兜底一次未认证跳转。

use crate::auth::use_auth;
use crate::components::icons::{Heart, TrendingUp, Users};
use crate::components::navbar::NavBar;
use crate::components::profile_card::ProfileCard;
use crate::web;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::wishlist::use_wishlist;
use foundernet_shared::{UserRole, mock};
use leptos::prelude::*;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(3600);
const DAY: Duration = Duration::from_secs(86_400);

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let wishlist = use_wishlist();
    let router = use_router();
    let user = auth.user_signal();

    // 如果未认证则重定向
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading && !state.is_authenticated() {
            router.navigate(AppRoute::auth_failure_redirect());
        }
    });

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            {move || user.get().map(|user| {
                let role = user.role;
                let suggestions = mock::mock_users()
                    .into_iter()
                    .filter(|p| role.suggested_roles().contains(&p.role))
                    .collect::<Vec<_>>();

                view! {
                    <div class="max-w-6xl mx-auto px-4 py-8 space-y-6">
                        <div>
                            <h1 class="text-2xl font-bold">{role.dashboard_title()}</h1>
                            <p class="text-base-content/70">"欢迎回来，" {user.name.clone()}</p>
                        </div>

                        // 统计数据
                        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                            <div class="stat">
                                <div class="stat-figure text-primary">
                                    <Users attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"人脉总数"</div>
                                <div class="stat-value text-primary">{user.connections}</div>
                                <div class="stat-desc">"接受邀请后自动增长"</div>
                            </div>

                            <div class="stat">
                                <div class="stat-figure text-secondary">
                                    <Heart attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"收藏档案"</div>
                                <div class="stat-value text-secondary">
                                    {move || wishlist.state.get().len()}
                                </div>
                                <div class="stat-desc">"在搜索页点心形即可收藏"</div>
                            </div>

                            <div class="stat">
                                <div class="stat-figure text-success">
                                    <TrendingUp attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"本周档案曝光"</div>
                                <div class="stat-value text-success">{weekly_views(role)}</div>
                                <div class="stat-desc">"示例统计值"</div>
                            </div>
                        </div>

                        // 互补角色推荐
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">"为你推荐"</h3>
                                <p class="text-sm text-base-content/70">
                                    "根据你的角色匹配的互补档案。"
                                </p>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                                    {suggestions
                                        .into_iter()
                                        .map(|profile| view! { <ProfileCard profile=profile /> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <RecentActivity />
                    </div>
                }
            })}
        </div>
    }
}

/// 最近动态卡片（静态示例数据）
#[component]
fn RecentActivity() -> impl IntoView {
    let now = web::now();
    let users = mock::mock_users();
    let entries = vec![
        (users[2].clone(), "查看了你的档案", now - HOUR * 2),
        (users[0].clone(), "接受了你的连接邀请", now - HOUR * 26),
        (users[1].clone(), "在社区回复了你的帖子", now - DAY * 2),
    ];

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">"最近动态"</h3>
                <ul class="space-y-3 mt-2">
                    {entries
                        .into_iter()
                        .map(|(profile, action, at)| view! {
                            <li class="flex items-center gap-3">
                                <div class="avatar">
                                    <div class="w-8 rounded-full">
                                        <img src=profile.avatar.clone() alt=profile.name.clone() />
                                    </div>
                                </div>
                                <span class="text-sm">
                                    <span class="font-bold">{profile.name.clone()}</span>
                                    " " {action}
                                </span>
                                <span class="text-xs text-base-content/50 ml-auto">
                                    {at.relative_to(now)}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 示例统计：不同角色的曝光基数不同
fn weekly_views(role: UserRole) -> u32 {
    match role {
        UserRole::Mentor => 186,
        UserRole::Mentee => 42,
        UserRole::Investor => 321,
        UserRole::ServiceProvider => 97,
        UserRole::Cofounder => 128,
    }
}
