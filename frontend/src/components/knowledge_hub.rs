//! 知识库页面
//!
//! 按分类标签页浏览内置的知识条目。

use crate::components::footer::Footer;
use crate::components::icons::{BookOpen, Clock};
use crate::components::navbar::NavBar;
use foundernet_shared::mock;
use leptos::prelude::*;

#[component]
pub fn KnowledgeHubPage() -> impl IntoView {
    let categories = mock::resource_categories();
    let (active, set_active) = signal(categories.first().cloned().unwrap_or_default());

    let visible = move || {
        let category = active.get();
        mock::mock_resources()
            .into_iter()
            .filter(|resource| resource.category == category)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            <div class="max-w-4xl mx-auto px-4 py-8 space-y-4">
                <div>
                    <h1 class="text-2xl font-bold">"Knowledge Hub"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Curated reading for every stage of building a company."
                    </p>
                </div>

                <div role="tablist" class="tabs tabs-boxed w-fit bg-base-100">
                    {categories
                        .into_iter()
                        .map(|category| {
                            let current = category.clone();
                            let on_click = {
                                let category = category.clone();
                                move |_| set_active.set(category.clone())
                            };
                            view! {
                                <a
                                    role="tab"
                                    class=move || if active.get() == current {
                                        "tab tab-active"
                                    } else {
                                        "tab"
                                    }
                                    on:click=on_click
                                >
                                    {category}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <For
                        each=visible
                        key=|resource| resource.id.clone()
                        children=move |resource| view! {
                            <div class="card bg-base-100 border border-base-300 shadow-sm">
                                <div class="card-body gap-2">
                                    <BookOpen attr:class="h-6 w-6 text-primary" />
                                    <h3 class="font-bold">{resource.title.clone()}</h3>
                                    <p class="text-sm text-base-content/70">
                                        {resource.summary.clone()}
                                    </p>
                                    <div class="flex items-center gap-1 text-xs text-base-content/50">
                                        <Clock attr:class="h-3 w-3" />
                                        {resource.read_minutes} " min read"
                                    </div>
                                </div>
                            </div>
                        }
                    />
                </div>
            </div>
            <Footer />
        </div>
    }
}
