//! Mission Context - 任务
//!
//! Mission 是 Scientist 与 Planet 之间多对多关系的关联实体

mod aggregate;

pub use aggregate::{Mission, NewMission};
