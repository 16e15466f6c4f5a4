//! Planet Context - 行星
//!
//! 行星在 API 层只读，仅通过仓储写入

mod aggregate;

pub use aggregate::{NewPlanet, Planet};
