//! Home Handler
//!
//! 存活检查

/// GET / - 纯文本存活响应
pub async fn home() -> &'static str {
    "Home"
}
