//! Scientist Context - 科学家
//!
//! 职责:
//! - 科学家实体与字段校验
//! - 部分更新（patch）语义

mod aggregate;

pub use aggregate::{NewScientist, Scientist, ScientistPatch};
