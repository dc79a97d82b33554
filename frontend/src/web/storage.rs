//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。
//! 调用方只依赖这组窄接口，未来换成真实持久化层时无需改动调用点。

use serde::Serialize;
use serde::de::DeserializeOwned;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 将值序列化为 JSON 后写入
    ///
    /// 序列化失败时不写入并返回 `false`。
    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json_wasm::to_string(value) {
            Ok(raw) => Self::set(key, &raw),
            Err(_) => false,
        }
    }

    /// 读取并反序列化 JSON 值
    ///
    /// 键不存在或内容无法解析时返回 `None`；
    /// 调用方需要区分"缺失"和"损坏"时应使用 [`LocalStorage::get`]。
    #[allow(dead_code)]
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::get(key)?;
        serde_json_wasm::from_str(&raw).ok()
    }
}
