//! 档案详情页
//!
//! 按 id 在通讯录中查找档案；未找到时渲染"不存在"状态。
//! 连接按钮只弹一条确认提示，没有真实的邀请流程。

use crate::components::footer::Footer;
use crate::components::icons::{Briefcase, Clock, Heart, MapPin, Star, UserPlus};
use crate::components::navbar::NavBar;
use crate::notify::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::wishlist::{toggle_saved, use_wishlist};
use foundernet_shared::{UserProfile, mock};
use leptos::prelude::*;

#[component]
pub fn ProfileViewPage(id: String) -> impl IntoView {
    // 路由变化会重建整个页面，这里按挂载时的 id 查一次即可
    match mock::mock_user(&id) {
        Some(profile) => view! {
            <div class="min-h-screen bg-base-200">
                <NavBar />
                <ProfileDetail profile=profile />
                <Footer />
            </div>
        }
        .into_any(),
        None => view! {
            <div class="min-h-screen bg-base-200">
                <NavBar />
                <div class="flex items-center justify-center py-32">
                    <div class="text-center">
                        <h1 class="text-4xl font-bold text-error">"Profile not found"</h1>
                        <p class="text-base-content/70 mt-4">
                            "This profile does not exist or is no longer available."
                        </p>
                        <Link to=AppRoute::Search class="btn btn-primary mt-6">
                            "Back to search"
                        </Link>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileDetail(profile: UserProfile) -> impl IntoView {
    let wishlist = use_wishlist();
    let notify = use_notify();

    let id = profile.id.clone();
    let saved = {
        let id = id.clone();
        move || wishlist.state.get().contains(&id)
    };
    let on_toggle = {
        let id = id.clone();
        let name = profile.name.clone();
        move |_| {
            if toggle_saved(&wishlist, &id) {
                notify.success(format!("{} added to your wishlist", name));
            } else {
                notify.success(format!("{} removed from your wishlist", name));
            }
        }
    };
    let on_connect = {
        let name = profile.name.clone();
        move |_| notify.success(format!("Connection request sent to {}", name))
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <div class="flex flex-col md:flex-row md:items-center gap-6">
                        <div class="avatar">
                            <div class="w-24 rounded-full">
                                <img src=profile.avatar.clone() alt=profile.name.clone() />
                            </div>
                        </div>
                        <div class="flex-1">
                            <h1 class="text-3xl font-bold">{profile.name.clone()}</h1>
                            <div class="mt-1 flex items-center gap-3">
                                <span class=profile.role.badge_class()>
                                    {profile.role.label()}
                                </span>
                                <span class="flex items-center gap-1 text-sm text-base-content/60">
                                    <MapPin attr:class="h-4 w-4" />
                                    {profile.location.clone()}
                                </span>
                            </div>
                            <div class="mt-2 flex items-center gap-4 text-sm text-base-content/60">
                                <span class="flex items-center gap-1">
                                    <Star attr:class="h-4 w-4 text-warning" />
                                    {format!("{:.1}", profile.rating)}
                                </span>
                                <span>{profile.connections} " connections"</span>
                            </div>
                        </div>
                        <div class="flex gap-2">
                            <button class="btn btn-primary gap-2" on:click=on_connect>
                                <UserPlus attr:class="h-4 w-4" /> "Connect"
                            </button>
                            <button class="btn btn-outline btn-circle" on:click=on_toggle>
                                <Heart attr:class=move || if saved() {
                                    "h-5 w-5 text-error fill-current"
                                } else {
                                    "h-5 w-5"
                                } />
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body gap-3">
                    <h3 class="card-title">"About"</h3>
                    <p class="text-base-content/80">{profile.bio.clone()}</p>

                    <h3 class="card-title mt-2">"Expertise"</h3>
                    <div class="flex flex-wrap gap-1">
                        {profile
                            .expertise
                            .iter()
                            .map(|term| view! {
                                <span class="badge badge-outline">{term.clone()}</span>
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-2 grid grid-cols-1 md:grid-cols-2 gap-3 text-sm">
                        <span class="flex items-center gap-2 text-base-content/70">
                            <Briefcase attr:class="h-4 w-4" />
                            {profile.industry.clone()}
                        </span>
                        <span class="flex items-center gap-2 text-base-content/70">
                            <Clock attr:class="h-4 w-4" />
                            {profile.experience.clone()} " of experience"
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
