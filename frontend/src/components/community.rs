//! 社区信息流页面
//!
//! 信息流以内置示例帖子起步；已登录用户可以发帖，
//! 新帖只进内存列表，刷新即回到初始状态。

use crate::auth::use_auth;
use crate::components::footer::Footer;
use crate::components::icons::Plus;
use crate::components::navbar::NavBar;
use crate::components::post_card::PostCard;
use crate::notify::use_notify;
use crate::web;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use foundernet_shared::{Post, UserProfile, mock};
use leptos::prelude::*;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notify();
    let is_authed = auth.is_authenticated_signal();

    let now = web::now();
    let (posts, set_posts) = signal(mock::mock_posts(now));

    // 发帖表单
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let (next_local_id, set_next_local_id) = signal(1u32);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || content.get().trim().is_empty() {
            notify.error("A post needs both a title and some content");
            return;
        }
        let Some(user) = auth.state.get_untracked().user else {
            notify.error("Please sign in before posting");
            return;
        };

        // 作者档案由会话用户拼出，形状与通讯录档案一致
        let author = UserProfile {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
            avatar: user.avatar.clone(),
            bio: String::new(),
            expertise: Vec::new(),
            location: String::new(),
            connections: user.connections,
            industry: String::new(),
            experience: String::new(),
            rating: 0.0,
        };
        let post = Post {
            id: format!("local-{}", next_local_id.get_untracked()),
            author,
            title: title.get_untracked().trim().to_string(),
            content: content.get_untracked().trim().to_string(),
            likes: 0,
            comments: 0,
            created_at: web::now(),
            tags: tags
                .get_untracked()
                .split(',')
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        };

        set_next_local_id.update(|n| *n += 1);
        set_posts.update(|list| list.insert(0, post));
        title.set(String::new());
        content.set(String::new());
        tags.set(String::new());
        notify.success("Post published");
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            <div class="max-w-2xl mx-auto px-4 py-8 space-y-4">
                <div>
                    <h1 class="text-2xl font-bold">"Community"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Ask questions, share wins, find your next collaborator."
                    </p>
                </div>

                // 发帖框：未登录时显示登录引导
                <Show
                    when=move || is_authed.get()
                    fallback=|| view! {
                        <div class="card bg-base-100 border border-base-300">
                            <div class="card-body flex-row items-center justify-between py-4">
                                <p class="text-sm text-base-content/70">
                                    "Sign in to join the conversation."
                                </p>
                                <Link to=AppRoute::auth(false) class="btn btn-primary btn-sm">
                                    "Sign in"
                                </Link>
                            </div>
                        </div>
                    }
                >
                    <div class="card bg-base-100 border border-base-300">
                        <form class="card-body gap-3" on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Title"
                                class="input input-bordered"
                                on:input=move |ev| title.set(event_target_value(&ev))
                                prop:value=move || title.get()
                            />
                            <textarea
                                placeholder="What do you want to share?"
                                class="textarea textarea-bordered"
                                rows="3"
                                on:input=move |ev| content.set(event_target_value(&ev))
                                prop:value=move || content.get()
                            ></textarea>
                            <input
                                type="text"
                                placeholder="Tags, comma separated"
                                class="input input-bordered input-sm"
                                on:input=move |ev| tags.set(event_target_value(&ev))
                                prop:value=move || tags.get()
                            />
                            <div class="card-actions justify-end">
                                <button type="submit" class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" /> "Post"
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>

                <For
                    each=move || posts.get()
                    key=|post| post.id.clone()
                    children=move |post| view! { <PostCard post=post now=now /> }
                />
            </div>
            <Footer />
        </div>
    }
}
