//! 收藏列表模块
//!
//! 浏览器范围内保存的档案 id 集合。序列化形式是纯 JSON 字符串数组，
//! 与 LocalStorage 中的持久化格式一一对应；插入顺序保留。

use serde::{Deserialize, Serialize};

/// 收藏的档案 id 集合
///
/// 不含重复项。`toggle` 成对调用后集合回到原状。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist(Vec<String>);

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已持久化的 id 列表恢复，去掉历史数据中的重复项
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut list = Self::new();
        for id in ids {
            if !list.contains(&id) {
                list.0.push(id);
            }
        }
        list
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|saved| saved == id)
    }

    /// 存在则移除、缺席则追加
    ///
    /// 返回切换后该 id 是否在集合中。
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.0.retain(|saved| saved != id);
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Wishlist::new();
        assert!(list.toggle("u-1"));
        assert!(list.contains("u-1"));
        assert!(!list.toggle("u-1"));
        assert!(!list.contains("u-1"));
        assert!(list.is_empty());
    }

    #[test]
    fn paired_toggles_restore_the_original_set() {
        let mut list = Wishlist::from_ids(vec!["u-2".to_string(), "u-4".to_string()]);
        let before = list.clone();
        list.toggle("u-3");
        list.toggle("u-3");
        assert_eq!(list, before);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut list = Wishlist::new();
        list.toggle("u-3");
        list.toggle("u-1");
        list.toggle("u-2");
        assert_eq!(list.ids(), ["u-3", "u-1", "u-2"]);
        list.toggle("u-1");
        assert_eq!(list.ids(), ["u-3", "u-2"]);
    }

    #[test]
    fn serializes_as_a_plain_json_array() {
        let mut list = Wishlist::new();
        list.toggle("u-5");
        list.toggle("u-1");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["u-5","u-1"]"#);
        let back: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn hydration_drops_duplicates() {
        let list = Wishlist::from_ids(vec![
            "u-1".to_string(),
            "u-2".to_string(),
            "u-1".to_string(),
        ]);
        assert_eq!(list.ids(), ["u-1", "u-2"]);
    }
}
