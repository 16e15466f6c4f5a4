//! Scientist Queries

/// 获取科学家详情查询
#[derive(Debug, Clone)]
pub struct GetScientist {
    pub scientist_id: i64,
}

/// 列出所有科学家查询
#[derive(Debug, Clone)]
pub struct ListScientists;
