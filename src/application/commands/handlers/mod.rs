//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod mission_handlers;
mod scientist_handlers;

pub use mission_handlers::*;
pub use scientist_handlers::*;
