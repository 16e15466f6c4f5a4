//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Scientist / Planet / Mission 仓储、关系图读取）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - serialization: 边界处的序列化裁剪
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod serialization;

// Re-exports
pub use commands::{
    // Scientist commands
    CreateScientist,
    DeleteScientist,
    UpdateScientist,
    // Mission commands
    CreateMission,
    // Handlers
    handlers::{
        CreateMissionHandler, CreateScientistHandler, DeleteScientistHandler,
        UpdateScientistHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    GraphReaderPort, MissionRepositoryPort, PlanetRepositoryPort, RepositoryError,
    ScientistRepositoryPort,
};

pub use queries::{
    // Scientist queries
    GetScientist,
    ListScientists,
    // Planet queries
    ListPlanets,
    // Handlers
    handlers::{GetScientistHandler, ListPlanetsHandler, ListScientistsHandler},
};

pub use serialization::{Dict, EntityGraph};
