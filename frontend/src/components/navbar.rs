//! 顶部导航栏
//!
//! 左侧为品牌与公共入口，右侧随认证状态切换：
//! 未登录显示登录 / 注册按钮，已登录显示收藏入口与头像菜单。

use crate::auth::{logout, use_auth};
use crate::components::icons::{Heart, LogOut, Rocket};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();
    let is_authed = auth.is_authenticated_signal();

    // 登出后的跳转由路由服务的认证监听处理
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
            <div class="flex-1 gap-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                    <Rocket attr:class="h-6 w-6 text-primary" />
                    "FounderNet"
                </Link>
                <div class="hidden md:flex gap-1">
                    <Link to=AppRoute::Search class="btn btn-ghost btn-sm">"Search"</Link>
                    <Link to=AppRoute::Community class="btn btn-ghost btn-sm">"Community"</Link>
                    <Link to=AppRoute::KnowledgeHub class="btn btn-ghost btn-sm">"Knowledge Hub"</Link>
                </div>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || is_authed.get()
                    fallback=move || view! {
                        <Link to=AppRoute::auth(false) class="btn btn-ghost btn-sm">"Sign in"</Link>
                        <Link to=AppRoute::auth(true) class="btn btn-primary btn-sm">"Join now"</Link>
                    }
                >
                    <Link to=AppRoute::Wishlist class="btn btn-ghost btn-circle btn-sm">
                        <Heart attr:class="h-5 w-5" />
                    </Link>
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar">
                            <div class="w-9 rounded-full">
                                <img
                                    alt="avatar"
                                    src=move || user.get().map(|u| u.avatar).unwrap_or_default()
                                />
                            </div>
                        </div>
                        <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52">
                            <li><Link to=AppRoute::Dashboard>"Dashboard"</Link></li>
                            <li><Link to=AppRoute::Profile>"My profile"</Link></li>
                            <li><Link to=AppRoute::Wishlist>"Wishlist"</Link></li>
                            <li>
                                <a on:click=on_logout class="text-error">
                                    <LogOut attr:class="h-4 w-4" /> "Sign out"
                                </a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
