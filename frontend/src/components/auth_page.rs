use crate::auth::{login, signup, use_auth};
use crate::components::icons::Rocket;
use crate::web::router::Link;
use crate::web::route::AppRoute;
use foundernet_shared::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录 / 注册页面
///
/// 初始标签页由路由的 `?signup=true` 决定。
/// 认证成功后的跳转由路由服务监听认证信号自动完成。
#[component]
pub fn AuthPage(signup_first: bool) -> impl IntoView {
    let auth = use_auth();

    let (is_signup, set_is_signup) = signal(signup_first);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty()
            || password.get().is_empty()
            || (is_signup.get() && name.get().is_empty())
        {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = if is_signup.get_untracked() {
                signup(
                    &auth,
                    name.get_untracked(),
                    email.get_untracked(),
                    password.get_untracked(),
                    role.get_untracked(),
                )
                .await
            } else {
                login(&auth, email.get_untracked(), password.get_untracked()).await
            };

            if let Err(err) = result {
                set_error_msg.set(Some(err.to_string()));
            }
            // 成功后的跳转交给路由服务的认证监听
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Rocket attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"FounderNet"</h1>
                        <p class="text-base-content/70">
                            "Your startup network starts here"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <div role="tablist" class="tabs tabs-boxed grid grid-cols-2 mb-2">
                            <a
                                role="tab"
                                class=move || if !is_signup.get() { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_is_signup.set(false)
                            >
                                "Sign in"
                            </a>
                            <a
                                role="tab"
                                class=move || if is_signup.get() { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_is_signup.set(true)
                            >
                                "Create account"
                            </a>
                        </div>

                        <form class="space-y-3" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <Show when=move || is_signup.get()>
                                <div class="form-control">
                                    <label class="label" for="name">
                                        <span class="label-text">"Full name"</span>
                                    </label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder="Ada Lovelace"
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                        prop:value=move || name.get()
                                        class="input input-bordered"
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="role">
                                        <span class="label-text">"I am joining as"</span>
                                    </label>
                                    <select
                                        id="role"
                                        class="select select-bordered"
                                        on:change=move |ev| {
                                            if let Some(picked) = UserRole::from_slug(&event_target_value(&ev)) {
                                                role.set(picked);
                                            }
                                        }
                                    >
                                        {UserRole::ALL
                                            .into_iter()
                                            .map(|option| view! {
                                                <option
                                                    value=option.slug()
                                                    selected=move || role.get() == option
                                                >
                                                    {option.label()}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="text"
                                    placeholder="you@startup.io"
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    prop:value=move || email.get()
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    prop:value=move || password.get()
                                    class="input input-bordered"
                                    required
                                />
                            </div>

                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            {if is_signup.get() { "Creating account..." } else { "Signing in..." }}
                                        }
                                        .into_any()
                                    } else if is_signup.get() {
                                        "Create account".into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }}
                                </button>
                            </div>
                        </form>

                        <p class="text-center text-xs text-base-content/50 mt-2">
                            "Demo mode: any non-empty credentials work. "
                            <Link to=AppRoute::Home class="link">"Back to home"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
