//! 通讯录搜索页
//!
//! 每次按键 / 选择变化都在内存列表上同步过滤，
//! 过滤逻辑在 `foundernet-shared::filter`，这里只负责表单与展示。

mod filter_panel;
mod filter_state;

use crate::components::footer::Footer;
use crate::components::icons::{Search, Users};
use crate::components::navbar::NavBar;
use crate::components::profile_card::ProfileCard;
use filter_panel::FilterPanel;
use filter_state::FilterState;
use foundernet_shared::{SortKey, mock};
use leptos::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    let state = FilterState::new();
    let directory = mock::mock_users();

    let results = Memo::new(move |_| state.apply(&directory));

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            <div class="max-w-6xl mx-auto px-4 py-8 space-y-4">
                <div class="flex flex-col md:flex-row gap-3 md:items-center md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold">"Find your people"</h1>
                        <p class="text-base-content/70 text-sm">
                            "Search mentors, investors, cofounders and specialists."
                        </p>
                    </div>
                    // 排序方式
                    <select
                        class="select select-bordered select-sm w-44"
                        on:change=move |ev| state.sort.set(SortKey::from_slug(&event_target_value(&ev)))
                    >
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! {
                                <option
                                    value=key.slug()
                                    selected=move || state.sort.get() == key
                                >
                                    {key.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <label class="input input-bordered flex items-center gap-2 bg-base-100">
                    <Search attr:class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search by name, bio or expertise"
                        on:input=move |ev| state.query.set(event_target_value(&ev))
                        prop:value=move || state.query.get()
                    />
                </label>

                <div class="grid grid-cols-1 lg:grid-cols-4 gap-4">
                    <div class="lg:col-span-1">
                        <FilterPanel state=state />
                    </div>
                    <div class="lg:col-span-3">
                        <p class="text-sm text-base-content/60 mb-2">
                            {move || {
                                let count = results.get().len();
                                if count == 1 {
                                    "1 profile".to_string()
                                } else {
                                    format!("{} profiles", count)
                                }
                            }}
                        </p>
                        <Show
                            when=move || !results.get().is_empty()
                            fallback=|| view! {
                                <div class="card bg-base-100 border border-base-300">
                                    <div class="card-body items-center text-center py-16">
                                        <Users attr:class="h-10 w-10 opacity-30" />
                                        <p class="font-bold">"No profiles match your filters"</p>
                                        <p class="text-sm text-base-content/60">
                                            "Try fewer filters or a shorter search term."
                                        </p>
                                    </div>
                                </div>
                            }
                        >
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <For
                                    each=move || results.get()
                                    key=|profile| profile.id.clone()
                                    children=move |profile| view! { <ProfileCard profile=profile /> }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
            <Footer />
        </div>
    }
}
