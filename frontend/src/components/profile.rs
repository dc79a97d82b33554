//! 个人档案页
//!
//! 展示当前会话用户的信息与人脉往来记录。

use crate::auth::use_auth;
use crate::components::connection_history::ConnectionHistory;
use crate::components::navbar::NavBar;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
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
            {move || user.get().map(|user| view! {
                <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body flex-row items-center gap-6">
                            <div class="avatar">
                                <div class="w-20 rounded-full">
                                    <img src=user.avatar.clone() alt=user.name.clone() />
                                </div>
                            </div>
                            <div class="flex-1">
                                <h1 class="text-2xl font-bold">{user.name.clone()}</h1>
                                <p class="text-sm text-base-content/60">{user.email.clone()}</p>
                                <div class="mt-2 flex items-center gap-3">
                                    <span class=user.role.badge_class()>{user.role.label()}</span>
                                    <span class="text-sm text-base-content/60">
                                        {user.connections} " 位人脉"
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <ConnectionHistory />
                </div>
            })}
        </div>
    }
}
