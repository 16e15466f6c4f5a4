//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod planet_handlers;
mod scientist_handlers;

pub use planet_handlers::*;
pub use scientist_handlers::*;
