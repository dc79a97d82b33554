//! 筛选表单状态模块
//!
//! 将零散的 signal 整合为 `FilterState` 结构体，负责：
//! - 数据的持有与重置
//! - 多选维度的切换
//! - 转换为领域层的 `SearchFilter` 并套用排序

use foundernet_shared::{SearchFilter, SortKey, UserProfile, UserRole};
use leptos::prelude::*;

/// 筛选面板状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FilterState {
    pub query: RwSignal<String>,
    pub roles: RwSignal<Vec<UserRole>>,
    pub expertise: RwSignal<Vec<String>>,
    pub industries: RwSignal<Vec<String>>,
    /// 空字符串表示未选择
    pub experience: RwSignal<String>,
    /// 空字符串表示未选择
    pub location: RwSignal<String>,
    pub sort: RwSignal<SortKey>,
}

impl FilterState {
    /// 创建新的筛选状态，所有维度不设约束
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            roles: RwSignal::new(Vec::new()),
            expertise: RwSignal::new(Vec::new()),
            industries: RwSignal::new(Vec::new()),
            experience: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            sort: RwSignal::new(SortKey::default()),
        }
    }

    /// 清空全部筛选条件（保留排序方式）
    pub fn reset(&self) {
        self.query.set(String::new());
        self.roles.set(Vec::new());
        self.expertise.set(Vec::new());
        self.industries.set(Vec::new());
        self.experience.set(String::new());
        self.location.set(String::new());
    }

    /// 角色多选：有则移除、无则加入
    pub fn toggle_role(&self, role: UserRole) {
        self.roles.update(|list| {
            if let Some(pos) = list.iter().position(|r| *r == role) {
                list.remove(pos);
            } else {
                list.push(role);
            }
        });
    }

    /// 专长多选
    pub fn toggle_expertise(&self, term: &str) {
        toggle_value(self.expertise, term);
    }

    /// 行业多选
    pub fn toggle_industry(&self, industry: &str) {
        toggle_value(self.industries, industry);
    }

    /// 转换为领域层筛选条件
    pub fn to_filter(&self) -> SearchFilter {
        let experience = self.experience.get();
        let location = self.location.get();
        SearchFilter {
            query: self.query.get(),
            roles: self.roles.get(),
            expertise: self.expertise.get(),
            industries: self.industries.get(),
            experience: if experience.is_empty() {
                None
            } else {
                Some(experience)
            },
            location: if location.is_empty() {
                None
            } else {
                Some(location)
            },
        }
    }

    /// 过滤并排序整个通讯录
    pub fn apply(&self, profiles: &[UserProfile]) -> Vec<UserProfile> {
        let mut results = self.to_filter().apply(profiles);
        self.sort.get().apply(&mut results);
        results
    }
}

fn toggle_value(list: RwSignal<Vec<String>>, value: &str) {
    list.update(|list| {
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
    });
}
