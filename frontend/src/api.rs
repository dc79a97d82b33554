//! 模拟后端模块
//!
//! 平台没有真实后端：登录 / 注册在固定延迟后伪造出用户记录，
//! 除字段校验外永不失败。通讯录与信息流数据直接来自
//! `foundernet-shared` 的内置示例，不经过这里。

use crate::web;
use foundernet_shared::{AuthUser, UserRole};

/// 模拟请求的固定延迟（毫秒）
const SIMULATED_LATENCY_MS: u32 = 800;

/// 认证请求的校验错误
///
/// 这是模拟后端唯一的失败形态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 必填字段为空
    EmptyField(&'static str),
    /// 邮箱格式不合法
    InvalidEmail,
}

impl core::fmt::Display for AuthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthError::EmptyField(field) => write!(f, "Please fill in the {} field", field),
            AuthError::InvalidEmail => write!(f, "That email address does not look valid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FounderNetApi;

impl FounderNetApi {
    pub fn new() -> Self {
        Self
    }

    /// 登录
    ///
    /// 不校验凭据真伪：字段非空且邮箱形如 `a@b` 即视为成功。
    /// 同一邮箱每次登录得到同一条伪造记录。
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        validate_email(email)?;
        validate_non_empty("password", password)?;

        web::sleep(SIMULATED_LATENCY_MS).await;
        Ok(fabricate_user(
            display_name_from_email(email),
            email,
            UserRole::default(),
        ))
    }

    /// 注册
    ///
    /// 与登录同构，但使用用户填写的姓名与角色。
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<AuthUser, AuthError> {
        validate_non_empty("name", name)?;
        validate_email(email)?;
        validate_non_empty("password", password)?;

        web::sleep(SIMULATED_LATENCY_MS).await;
        Ok(fabricate_user(name.trim().to_string(), email, role))
    }
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    validate_non_empty("email", email)?;
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthError::InvalidEmail),
    }
}

/// 同一邮箱稳定映射到同一指纹 (FNV-1a)
fn fingerprint(email: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in email.trim().to_lowercase().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// 由邮箱推导展示名："jane.doe@example.com" -> "Jane Doe"
fn display_name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or("");
    let mut name = String::new();
    for part in local.split(['.', '_', '-']).filter(|p| !p.is_empty()) {
        if !name.is_empty() {
            name.push(' ');
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    if name.is_empty() {
        "New Member".to_string()
    } else {
        name
    }
}

/// 伪造一条会话用户记录
///
/// id 与头像槽位都从邮箱指纹派生，保证跨次登录稳定。
fn fabricate_user(name: String, email: &str, role: UserRole) -> AuthUser {
    let fp = fingerprint(email);
    AuthUser {
        id: format!("u-{:016x}", fp),
        name,
        email: email.trim().to_string(),
        role,
        avatar: format!("https://i.pravatar.cc/150?img={}", fp % 70 + 1),
        connections: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            validate_non_empty("password", "   "),
            Err(AuthError::EmptyField("password"))
        );
        assert_eq!(validate_email(""), Err(AuthError::EmptyField("email")));
    }

    #[test]
    fn emails_need_a_local_part_and_a_domain() {
        assert_eq!(validate_email("alex@founder.net"), Ok(()));
        assert_eq!(validate_email("  alex@founder.net  "), Ok(()));
        assert_eq!(validate_email("no-at-sign"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_email("@founder.net"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_email("alex@"), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn fabricated_users_are_stable_per_email() {
        let a = fabricate_user("Alex".to_string(), "alex@founder.net", UserRole::Mentor);
        let b = fabricate_user("Alex".to_string(), " ALEX@Founder.net ", UserRole::Mentor);
        assert!(!a.id.is_empty());
        assert_eq!(a.id, b.id);
        assert_eq!(a.avatar, b.avatar);
    }

    #[test]
    fn different_emails_get_different_ids() {
        let a = fabricate_user("A".to_string(), "a@x.io", UserRole::Mentee);
        let b = fabricate_user("B".to_string(), "b@x.io", UserRole::Mentee);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn display_names_read_like_names() {
        assert_eq!(display_name_from_email("jane.doe@example.com"), "Jane Doe");
        assert_eq!(display_name_from_email("marcus_reed@x.dev"), "Marcus Reed");
        assert_eq!(display_name_from_email("priya@x.dev"), "Priya");
        assert_eq!(display_name_from_email("@x.dev"), "New Member");
    }

    #[test]
    fn session_record_survives_a_json_round_trip() {
        let user = fabricate_user("Alex".to_string(), "alex@founder.net", UserRole::Investor);
        let json = serde_json_wasm::to_string(&user).unwrap();
        let back: AuthUser = serde_json_wasm::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
