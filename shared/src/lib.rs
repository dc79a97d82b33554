use serde::{Deserialize, Serialize};

mod date;
pub mod filter;
pub mod mock;
pub mod role;
pub mod wishlist;

pub use date::Timestamp;
pub use filter::{SearchFilter, SortKey};
pub use role::UserRole;
pub use wishlist::Wishlist;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话记录的 LocalStorage 键
pub const STORAGE_USER_KEY: &str = "user";
/// 收藏列表的 LocalStorage 键
pub const STORAGE_WISHLIST_KEY: &str = "wishlist";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 通讯录中的用户档案
///
/// 全部为静态示例数据，不做唯一性或引用完整性约束。
/// 空的 `expertise` / 空字符串字段表示"缺失"，过滤时按不匹配处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub location: String,
    pub connections: u32,
    pub industry: String,
    pub experience: String,
    pub rating: f32,
}

/// 社区帖子
///
/// 作者以冗余方式内嵌，与来源数据保持一致，不做范式化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: UserProfile,
    pub title: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: Timestamp,
    pub tags: Vec<String>,
}

/// 当前会话的用户记录
///
/// 登录/注册时伪造生成，JSON 序列化后存入 LocalStorage 的
/// [`STORAGE_USER_KEY`] 键；登出或清除存储时销毁。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    pub connections: u32,
}

/// 知识库条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub read_minutes: u32,
}
