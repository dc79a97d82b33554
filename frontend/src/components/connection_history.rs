//! 人脉往来记录
//!
//! 个人档案页的往来列表，示例数据由通讯录档案与相对时间拼出。

use crate::components::icons::UserPlus;
use crate::web;
use foundernet_shared::mock;
use leptos::prelude::*;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(3600);
const DAY: Duration = Duration::from_secs(86_400);

#[component]
pub fn ConnectionHistory() -> impl IntoView {
    let now = web::now();
    let users = mock::mock_users();
    let entries = vec![
        (users[2].clone(), "接受了你的连接邀请", now - HOUR * 5),
        (users[0].clone(), "查看了你的档案", now - HOUR * 28),
        (users[4].clone(), "向你发来了咨询", now - DAY * 4),
        (users[1].clone(), "成为了你的人脉", now - DAY * 9),
    ];

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title gap-2">
                    <UserPlus attr:class="h-5 w-5 text-primary" />
                    "人脉往来"
                </h3>
                <ul class="space-y-3 mt-2">
                    {entries
                        .into_iter()
                        .map(|(profile, action, at)| view! {
                            <li class="flex items-center gap-3">
                                <div class="avatar">
                                    <div class="w-9 rounded-full">
                                        <img src=profile.avatar.clone() alt=profile.name.clone() />
                                    </div>
                                </div>
                                <div class="flex-1">
                                    <p class="text-sm">
                                        <span class="font-bold">{profile.name.clone()}</span>
                                        " " {action}
                                    </p>
                                    <p class="text-xs text-base-content/50">
                                        {at.relative_to(now)}
                                    </p>
                                </div>
                                <span class=profile.role.badge_class()>
                                    {profile.role.label()}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
