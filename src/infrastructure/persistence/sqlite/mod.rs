//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod graph_reader;
mod mission_repo;
mod planet_repo;
mod scientist_repo;

#[cfg(test)]
pub(crate) mod testing;

pub use database::*;
pub use graph_reader::*;
pub use mission_repo::*;
pub use planet_repo::*;
pub use scientist_repo::*;
