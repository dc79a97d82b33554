//! 营销首页
//!
//! 首屏横幅、角色功能区与行动号召，全部静态渲染。

use crate::auth::use_auth;
use crate::components::footer::Footer;
use crate::components::icons::{ArrowRight, Search, TrendingUp};
use crate::components::navbar::NavBar;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use foundernet_shared::UserRole;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-100">
            <NavBar />
            <Hero />
            <Features />
            <CallToAction />
            <Footer />
        </div>
    }
}

/// 首屏横幅
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero py-20 bg-gradient-to-b from-base-200 to-base-100">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold leading-tight">
                        "Build your startup network, not just your product"
                    </h1>
                    <p class="py-6 text-lg text-base-content/70">
                        "FounderNet connects founders with the mentors, investors, cofounders \
                        and specialists who have been there before."
                    </p>
                    <div class="flex justify-center gap-3">
                        <Link to=AppRoute::auth(true) class="btn btn-primary gap-2">
                            "Get started" <ArrowRight attr:class="h-4 w-4" />
                        </Link>
                        <Link to=AppRoute::Search class="btn btn-outline gap-2">
                            <Search attr:class="h-4 w-4" /> "Browse profiles"
                        </Link>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 角色功能区
///
/// 卡片直接由角色枚举驱动，新增角色时这里自动长出一张卡。
#[component]
fn Features() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold text-center mb-2">
                "One network, five kinds of people"
            </h2>
            <p class="text-center text-base-content/70 mb-10">
                "Pick a role when you join; the platform tailors everything else."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {UserRole::ALL
                    .into_iter()
                    .map(|role| view! {
                        <div class="card bg-base-100 border border-base-300 shadow-sm">
                            <div class="card-body">
                                <span class=role.badge_class()>{role.label()}</span>
                                <p class="text-base-content/80">{role.tagline()}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// 行动号召
#[component]
fn CallToAction() -> impl IntoView {
    let auth = use_auth();
    let is_authed = auth.is_authenticated_signal();

    view! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <div class="card bg-primary text-primary-content shadow-xl">
                <div class="card-body items-center text-center">
                    <TrendingUp attr:class="h-8 w-8" />
                    <h2 class="card-title text-2xl">
                        "Your next connection might change everything"
                    </h2>
                    <p class="opacity-90">
                        "Search the directory, join the conversation, and keep a wishlist \
                        of people to meet."
                    </p>
                    <div class="card-actions mt-2">
                        <Show
                            when=move || is_authed.get()
                            fallback=|| view! {
                                <Link to=AppRoute::auth(true) class="btn">
                                    "Create your profile"
                                </Link>
                            }
                        >
                            <Link to=AppRoute::Dashboard class="btn">
                                "Go to your dashboard"
                            </Link>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
