//! Domain Layer - 领域层
//!
//! 包含三个上下文:
//! - Scientist Context: 科学家
//! - Planet Context: 行星
//! - Mission Context: 任务（Scientist 与 Planet 的关联实体）

pub mod mission;
pub mod planet;
pub mod scientist;

// 共享的字段校验
mod validation;

pub use mission::{Mission, NewMission};
pub use planet::{NewPlanet, Planet};
pub use scientist::{NewScientist, Scientist, ScientistPatch};
pub use validation::{
    validate_field_of_study, validate_foreign_key, validate_name, ValidationError,
};
