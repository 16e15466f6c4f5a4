//! Mission Commands

/// 创建任务命令
#[derive(Debug, Clone, Default)]
pub struct CreateMission {
    pub name: Option<String>,
    pub scientist_id: Option<i64>,
    pub planet_id: Option<i64>,
}
