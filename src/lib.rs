//! Cosmos - 科学家、行星与任务的 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Scientist / Planet / Mission 实体与校验规则
//!
//! 应用层 (application/):
//! - Ports: 仓储与实体图读取端口
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//! - Serialization: 按排除规则裁剪的实体 -> 字典序列化
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
