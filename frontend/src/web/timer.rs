//! 定时器封装模块
//!
//! 提供模拟请求延迟所需的可等待 sleep，以及当前时间的获取。

use foundernet_shared::Timestamp;
use gloo_timers::future::TimeoutFuture;

/// 异步等待指定毫秒数
///
/// 基于浏览器的 `setTimeout`，仅用于模拟网络延迟。
pub async fn sleep(millis: u32) {
    TimeoutFuture::new(millis).await;
}

/// 当前时间的毫秒时间戳
pub fn now() -> Timestamp {
    Timestamp::new(js_sys::Date::now() as i64)
}
