//! Serialization - 边界处的序列化
//!
//! 实体本身不知道如何序列化；裁剪规则按实体类型定义，在这里统一应用：
//! - rules: 排除路径树
//! - graph: 按 id 解析关联关系的只读快照
//! - render: 按规则把实体渲染为 JSON 对象

mod graph;
mod render;
mod rules;

pub use graph::EntityGraph;
pub use render::{
    mission_to_dict, planet_to_dict, scientist_to_dict, Dict, MISSION_RULES, PLANET_RULES,
    SCIENTIST_RULES,
};
pub use rules::SerializeRules;
