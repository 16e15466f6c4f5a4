//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::application::serialization::EntityGraph;
use crate::domain::{Mission, NewMission, NewPlanet, NewScientist, Planet, Scientist};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Scientist Repository
// ============================================================================

/// Scientist Repository Port
#[async_trait]
pub trait ScientistRepositoryPort: Send + Sync {
    /// 插入科学家，返回带 id 的实体
    async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, RepositoryError>;

    /// 更新可变字段
    async fn update(&self, scientist: &Scientist) -> Result<(), RepositoryError>;

    /// 删除科学家及其所有任务（同一事务），返回删除的任务数
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;
}

// ============================================================================
// Planet Repository
// ============================================================================

/// Planet Repository Port
#[async_trait]
pub trait PlanetRepositoryPort: Send + Sync {
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, RepositoryError>;
}

// ============================================================================
// Mission Repository
// ============================================================================

/// Mission Repository Port
#[async_trait]
pub trait MissionRepositoryPort: Send + Sync {
    /// 插入任务；外键不存在时返回 `Constraint`
    async fn insert(&self, mission: &NewMission) -> Result<Mission, RepositoryError>;
}

// ============================================================================
// Graph Reader
// ============================================================================

/// 实体关系图读取端口
///
/// 每次加载都在一个读事务内完成，供序列化时按 id 解析关联
#[async_trait]
pub trait GraphReaderPort: Send + Sync {
    /// 三张表的完整快照（列表接口）
    async fn load_graph(&self) -> Result<EntityGraph, RepositoryError>;

    /// 渲染单个科学家所需的子图：科学家本身、其任务、这些任务关联的行星
    ///
    /// 科学家不存在时返回空图
    async fn load_scientist_graph(&self, scientist_id: i64)
        -> Result<EntityGraph, RepositoryError>;

    /// 渲染单个任务所需的子图：任务所在行星的全部任务、参与这些任务的科学家，
    /// 以及这些科学家的任务和行星
    ///
    /// 任务不存在时返回空图
    async fn load_mission_graph(&self, mission_id: i64) -> Result<EntityGraph, RepositoryError>;
}
