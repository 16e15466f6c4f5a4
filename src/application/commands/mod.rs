//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod mission_commands;
mod scientist_commands;

pub mod handlers;

pub use mission_commands::*;
pub use scientist_commands::*;
