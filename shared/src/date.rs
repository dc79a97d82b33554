//! 时间类型模块
//!
//! 提供可序列化的毫秒时间戳 `Timestamp`，以及动态展示所需的
//! 相对时间（"5m ago"）与绝对时间（"Mar 3, 2026"）格式化。
//! 当前时间的获取属于宿主环境，由前端的 web 层负责。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// 毫秒时间戳，用于序列化传输和存储
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    /// 相对 `now` 的人类可读间隔
    ///
    /// 未来时间戳与一分钟以内的过去都显示为 "just now"。
    pub fn relative_to(&self, now: Timestamp) -> String {
        let elapsed = now - *self;
        let secs = elapsed.as_secs();
        if secs < 60 {
            "just now".to_string()
        } else if secs < 3600 {
            format!("{}m ago", secs / 60)
        } else if secs < 86_400 {
            format!("{}h ago", secs / 3600)
        } else if secs < 86_400 * 30 {
            format!("{}d ago", secs / 86_400)
        } else {
            self.format_date()
        }
    }

    /// 绝对日期展示，如 "Mar 3, 2026"
    ///
    /// 超出 chrono 可表示范围时退化为毫秒值本身。
    pub fn format_date(&self) -> String {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（早于 rhs 时饱和为零）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn relative_thresholds() {
        let now = Timestamp::new(1_756_000_000_000);
        assert_eq!(now.relative_to(now), "just now");
        assert_eq!((now - Duration::from_secs(59)).relative_to(now), "just now");
        assert_eq!((now - Duration::from_secs(60)).relative_to(now), "1m ago");
        assert_eq!((now - Duration::from_secs(5 * 60)).relative_to(now), "5m ago");
        assert_eq!((now - HOUR * 3).relative_to(now), "3h ago");
        assert_eq!((now - HOUR * 48).relative_to(now), "2d ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Timestamp::new(1_756_000_000_000);
        let future = now + HOUR;
        assert_eq!(future.relative_to(now), "just now");
    }

    #[test]
    fn old_timestamps_fall_back_to_absolute_dates() {
        // 2026-01-15T00:00:00Z
        let ts = Timestamp::new(1_768_435_200_000);
        let now = ts + HOUR * 24 * 90;
        assert_eq!(ts.relative_to(now), "Jan 15, 2026");
    }

    #[test]
    fn subtraction_saturates_at_zero() {
        let a = Timestamp::new(1_000);
        let b = Timestamp::new(5_000);
        assert_eq!(a - b, Duration::ZERO);
    }
}
