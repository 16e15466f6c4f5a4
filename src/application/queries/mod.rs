//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod planet_queries;
mod scientist_queries;

pub mod handlers;

pub use planet_queries::*;
pub use scientist_queries::*;
