//! 收藏上下文
//!
//! 将 `foundernet-shared` 的纯 [`Wishlist`] 集合接到响应式层：
//! 启动时从 LocalStorage 水合，每次切换后立即写回 `wishlist` 键，
//! 保证持久化内容与内存集合始终一致。

use crate::web::LocalStorage;
use foundernet_shared::{STORAGE_WISHLIST_KEY, Wishlist};
use leptos::prelude::*;

/// 收藏上下文
#[derive(Clone, Copy)]
pub struct WishlistContext {
    /// 收藏集合（只读）
    pub state: ReadSignal<Wishlist>,
    /// 设置收藏集合（写入）
    pub set_state: WriteSignal<Wishlist>,
}

impl WishlistContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(Wishlist::new());
        Self { state, set_state }
    }
}

/// 从 Context 获取收藏上下文
pub fn use_wishlist() -> WishlistContext {
    use_context::<WishlistContext>().expect("WishlistContext should be provided")
}

/// 初始化收藏状态
///
/// 从 LocalStorage 水合；损坏的存量数据直接丢弃并删除对应键。
pub fn init_wishlist(ctx: &WishlistContext) {
    let list = match LocalStorage::get(STORAGE_WISHLIST_KEY) {
        Some(raw) => match serde_json_wasm::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Wishlist::from_ids(ids),
            Err(_) => {
                LocalStorage::delete(STORAGE_WISHLIST_KEY);
                Wishlist::new()
            }
        },
        None => Wishlist::new(),
    };
    ctx.set_state.set(list);
}

/// 切换某个档案的收藏状态
///
/// 每次变更后立即持久化。返回切换后该 id 是否在收藏中。
pub fn toggle_saved(ctx: &WishlistContext, id: &str) -> bool {
    let mut list = ctx.state.get_untracked();
    let saved = list.toggle(id);
    LocalStorage::set_json(STORAGE_WISHLIST_KEY, &list);
    ctx.set_state.set(list);
    saved
}
