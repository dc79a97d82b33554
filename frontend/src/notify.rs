//! 通知模块
//!
//! 页面间共享的 toast 提示。任何组件都可以通过上下文发出提示，
//! `ToastHost` 挂在 App 根部负责渲染，3 秒后自动消失。

use leptos::prelude::*;

/// 一条待展示的提示
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct NotifyContext {
    state: ReadSignal<Option<Notice>>,
    set_state: WriteSignal<Option<Notice>>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(None);
        Self { state, set_state }
    }

    /// 发出成功提示（覆盖当前展示中的提示）
    pub fn success(&self, message: impl Into<String>) {
        self.set_state.set(Some(Notice {
            message: message.into(),
            is_error: false,
        }));
    }

    /// 发出错误提示
    pub fn error(&self, message: impl Into<String>) {
        self.set_state.set(Some(Notice {
            message: message.into(),
            is_error: true,
        }));
    }

    fn dismiss(&self) {
        self.set_state.set(None);
    }
}

/// 从 Context 获取通知上下文
pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided")
}

/// Toast 宿主组件
///
/// 应在 App 根部挂载一次。
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();
    let notice = notify.state;

    // 出现新提示后 3 秒自动清除
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(
                move || notify.dismiss(),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || match notice.get() {
                    Some(n) if n.is_error => "alert alert-error shadow-lg",
                    _ => "alert alert-success shadow-lg",
                }>
                    <span>{move || notice.get().map(|n| n.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
