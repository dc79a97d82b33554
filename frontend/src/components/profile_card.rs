//! 通讯录卡片
//!
//! 搜索结果、收藏页、控制台推荐共用的档案卡。
//! 收藏按钮即时切换并持久化，并以 toast 反馈结果。

use crate::components::icons::{Heart, MapPin, Star};
use crate::notify::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::wishlist::{toggle_saved, use_wishlist};
use foundernet_shared::UserProfile;
use leptos::prelude::*;

#[component]
pub fn ProfileCard(profile: UserProfile) -> impl IntoView {
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

    view! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body gap-3">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-3">
                        <div class="avatar">
                            <div class="w-12 rounded-full">
                                <img src=profile.avatar.clone() alt=profile.name.clone() />
                            </div>
                        </div>
                        <div>
                            <h3 class="font-bold">{profile.name.clone()}</h3>
                            <span class=profile.role.badge_class()>{profile.role.label()}</span>
                        </div>
                    </div>
                    <button class="btn btn-ghost btn-circle btn-sm" on:click=on_toggle>
                        <Heart attr:class=move || if saved() {
                            "h-5 w-5 text-error fill-current"
                        } else {
                            "h-5 w-5"
                        } />
                    </button>
                </div>

                <p class="text-sm text-base-content/70 line-clamp-2">{profile.bio.clone()}</p>

                <div class="flex flex-wrap gap-1">
                    {profile
                        .expertise
                        .iter()
                        .map(|term| view! {
                            <span class="badge badge-outline badge-sm">{term.clone()}</span>
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center justify-between text-sm text-base-content/60">
                    <span class="flex items-center gap-1">
                        <MapPin attr:class="h-4 w-4" />
                        {profile.location.clone()}
                    </span>
                    <span class="flex items-center gap-1">
                        <Star attr:class="h-4 w-4 text-warning" />
                        {format!("{:.1}", profile.rating)}
                    </span>
                </div>

                <div class="card-actions justify-between items-center">
                    <span class="text-xs text-base-content/50">
                        {profile.connections} " connections"
                    </span>
                    <Link to=AppRoute::ProfileView(profile.id.clone()) class="btn btn-primary btn-sm">
                        "View profile"
                    </Link>
                </div>
            </div>
        </div>
    }
}
