//! 收藏页面
//!
//! 展示收藏集合与通讯录的交集；取消收藏后列表即时收缩。

use crate::components::footer::Footer;
use crate::components::icons::Heart;
use crate::components::navbar::NavBar;
use crate::components::profile_card::ProfileCard;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::wishlist::use_wishlist;
use foundernet_shared::mock;
use leptos::prelude::*;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = use_wishlist();

    let saved_profiles = move || {
        let list = wishlist.state.get();
        mock::mock_users()
            .into_iter()
            .filter(|profile| list.contains(&profile.id))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            <div class="max-w-5xl mx-auto px-4 py-8 space-y-4">
                <div>
                    <h1 class="text-2xl font-bold">"Your wishlist"</h1>
                    <p class="text-base-content/70 text-sm">
                        {move || {
                            let count = wishlist.state.get().len();
                            if count == 1 {
                                "1 saved profile".to_string()
                            } else {
                                format!("{} saved profiles", count)
                            }
                        }}
                    </p>
                </div>

                <Show
                    when=move || !saved_profiles().is_empty()
                    fallback=|| view! {
                        <div class="card bg-base-100 border border-base-300">
                            <div class="card-body items-center text-center py-16">
                                <Heart attr:class="h-10 w-10 opacity-30" />
                                <p class="font-bold">"Nothing saved yet"</p>
                                <p class="text-sm text-base-content/60">
                                    "Tap the heart on any profile to keep it here."
                                </p>
                                <Link to=AppRoute::Search class="btn btn-primary btn-sm mt-2">
                                    "Browse profiles"
                                </Link>
                            </div>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <For
                            each=saved_profiles
                            key=|profile| profile.id.clone()
                            children=move |profile| view! { <ProfileCard profile=profile /> }
                        />
                    </div>
                </Show>
            </div>
            <Footer />
        </div>
    }
}
