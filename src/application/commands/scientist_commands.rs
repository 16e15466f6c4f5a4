//! Scientist Commands

use crate::domain::ScientistPatch;

/// 创建科学家命令
///
/// 字段为 `None` 表示请求中缺失
#[derive(Debug, Clone, Default)]
pub struct CreateScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

/// 部分更新科学家命令
#[derive(Debug, Clone)]
pub struct UpdateScientist {
    pub scientist_id: i64,
    pub patch: ScientistPatch,
}

/// 删除科学家命令（级联删除其任务）
#[derive(Debug, Clone)]
pub struct DeleteScientist {
    pub scientist_id: i64,
}
