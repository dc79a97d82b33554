//! 认证模块
//!
//! 管理会话状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! 会话记录以 JSON 形式持久化在 LocalStorage 的 `user` 键下。

use crate::api::{AuthError, FounderNetApi};
use crate::web::LocalStorage;
use foundernet_shared::{AuthUser, STORAGE_USER_KEY, UserRole};
use leptos::prelude::*;

/// 会话状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅认证后存在）
    pub user: Option<AuthUser>,
    /// 初始水合是否仍在进行
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            user: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 当前用户信号（导航栏、控制台等展示用）
    pub fn user_signal(&self) -> Signal<Option<AuthUser>> {
        let state = self.state;
        Signal::derive(move || state.get().user)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 水合上次的会话；损坏的存量数据直接丢弃并删除对应键。
pub fn init_auth(ctx: &AuthContext) {
    let user = match LocalStorage::get(STORAGE_USER_KEY) {
        Some(raw) => match serde_json_wasm::from_str::<AuthUser>(&raw) {
            Ok(user) => Some(user),
            Err(_) => {
                LocalStorage::delete(STORAGE_USER_KEY);
                None
            }
        },
        None => None,
    };

    ctx.set_state.update(|state| {
        state.user = user;
        state.is_loading = false;
    });
}

/// 登录并持久化会话
///
/// 完成时写入应用级上下文；页面在模拟延迟期间被切走也没有影响。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), AuthError> {
    let api = FounderNetApi::new();
    let user = api.login(&email, &password).await?;

    persist_session(&user);
    ctx.set_state.update(|state| {
        state.user = Some(user);
        state.is_loading = false;
    });
    Ok(())
}

/// 注册并持久化会话
pub async fn signup(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
    role: UserRole,
) -> Result<(), AuthError> {
    let api = FounderNetApi::new();
    let user = api.signup(&name, &email, &password, role).await?;

    persist_session(&user);
    ctx.set_state.update(|state| {
        state.user = Some(user);
        state.is_loading = false;
    });
    Ok(())
}

/// 登出并清除状态
///
/// 同时清除内存信号与 LocalStorage 中的会话键。
/// 导航由路由服务监听认证状态变化自动处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_USER_KEY);
    ctx.set_state.update(|state| state.user = None);
}

fn persist_session(user: &AuthUser) {
    LocalStorage::set_json(STORAGE_USER_KEY, user);
}
