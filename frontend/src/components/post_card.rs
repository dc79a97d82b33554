//! 信息流中的帖子卡片
//!
//! 点赞只改本地状态，不持久化，与来源应用的行为一致。

use crate::components::icons::{MessageCircle, ThumbsUp};
use foundernet_shared::{Post, Timestamp};
use leptos::prelude::*;

#[component]
pub fn PostCard(post: Post, now: Timestamp) -> impl IntoView {
    let (likes, set_likes) = signal(post.likes);
    let (liked, set_liked) = signal(false);

    let on_like = move |_| {
        if liked.get_untracked() {
            set_liked.set(false);
            set_likes.update(|n| *n = n.saturating_sub(1));
        } else {
            set_liked.set(true);
            set_likes.update(|n| *n += 1);
        }
    };

    let author = post.author.clone();
    let posted = post.created_at.relative_to(now);

    view! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body gap-3">
                <div class="flex items-center gap-3">
                    <div class="avatar">
                        <div class="w-10 rounded-full">
                            <img src=author.avatar.clone() alt=author.name.clone() />
                        </div>
                    </div>
                    <div class="flex-1">
                        <div class="flex items-center gap-2">
                            <span class="font-bold">{author.name.clone()}</span>
                            <span class=author.role.badge_class()>{author.role.label()}</span>
                        </div>
                        <p class="text-xs text-base-content/50">{posted}</p>
                    </div>
                </div>

                <h3 class="font-bold text-lg">{post.title.clone()}</h3>
                <p class="text-base-content/80 whitespace-pre-line">{post.content.clone()}</p>

                <div class="flex flex-wrap gap-1">
                    {post
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <span class="badge badge-ghost badge-sm">"#" {tag.clone()}</span>
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-4 text-sm text-base-content/60">
                    <button
                        class=move || if liked.get() {
                            "btn btn-ghost btn-xs gap-1 text-primary"
                        } else {
                            "btn btn-ghost btn-xs gap-1"
                        }
                        on:click=on_like
                    >
                        <ThumbsUp attr:class="h-4 w-4" />
                        {move || likes.get()}
                    </button>
                    <span class="flex items-center gap-1">
                        <MessageCircle attr:class="h-4 w-4" />
                        {post.comments} " comments"
                    </span>
                </div>
            </div>
        </div>
    }
}
