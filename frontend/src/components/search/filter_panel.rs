//! 筛选面板组件
//!
//! 纯粹的表单渲染，状态全部存放在 `FilterState` 中。
//! 选项列表从内置示例数据派生，保证不会出现永远匹配不到的选项。

use super::filter_state::FilterState;
use foundernet_shared::{UserRole, mock};
use leptos::prelude::*;

#[component]
pub fn FilterPanel(state: FilterState) -> impl IntoView {
    view! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body gap-4">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-base">"Filters"</h3>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| state.reset()>
                        "Clear all"
                    </button>
                </div>

                // 角色
                <div>
                    <p class="label-text font-bold mb-1">"Role"</p>
                    {UserRole::ALL
                        .into_iter()
                        .map(|role| view! {
                            <label class="label cursor-pointer justify-start gap-2 py-1">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    prop:checked=move || state.roles.get().contains(&role)
                                    on:change=move |_| state.toggle_role(role)
                                />
                                <span class="label-text">{role.label()}</span>
                            </label>
                        })
                        .collect_view()}
                </div>

                // 专长（点选式标签）
                <div>
                    <p class="label-text font-bold mb-2">"Expertise"</p>
                    <div class="flex flex-wrap gap-1">
                        {mock::expertise_options()
                            .into_iter()
                            .map(|term| chip(term, state.expertise, move |t| state.toggle_expertise(t)))
                            .collect_view()}
                    </div>
                </div>

                // 行业
                <div>
                    <p class="label-text font-bold mb-2">"Industry"</p>
                    <div class="flex flex-wrap gap-1">
                        {mock::industry_options()
                            .into_iter()
                            .map(|industry| chip(industry, state.industries, move |i| state.toggle_industry(i)))
                            .collect_view()}
                    </div>
                </div>

                // 经验水平
                <div class="form-control">
                    <label class="label">
                        <span class="label-text font-bold">"Experience level"</span>
                    </label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| state.experience.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || state.experience.get().is_empty()>
                            "Any"
                        </option>
                        {mock::experience_options()
                            .into_iter()
                            .map(|level| {
                                let current = level.clone();
                                view! {
                                    <option
                                        value=level.clone()
                                        selected=move || state.experience.get() == current
                                    >
                                        {level.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                // 所在地
                <div class="form-control">
                    <label class="label">
                        <span class="label-text font-bold">"Location"</span>
                    </label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| state.location.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || state.location.get().is_empty()>
                            "Anywhere"
                        </option>
                        {mock::location_options()
                            .into_iter()
                            .map(|place| {
                                let current = place.clone();
                                view! {
                                    <option
                                        value=place.clone()
                                        selected=move || state.location.get() == current
                                    >
                                        {place.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

/// 多选标签：选中时实心、未选中时描边
fn chip(
    value: String,
    selected: RwSignal<Vec<String>>,
    on_toggle: impl Fn(&str) + Copy + 'static,
) -> impl IntoView {
    let is_selected = {
        let value = value.clone();
        move || selected.get().iter().any(|v| *v == value)
    };
    let on_click = {
        let value = value.clone();
        move |_| on_toggle(&value)
    };

    view! {
        <button
            class=move || if is_selected() {
                "badge badge-primary cursor-pointer"
            } else {
                "badge badge-outline cursor-pointer"
            }
            on:click=on_click
        >
            {value}
        </button>
    }
}
