//! SQLite Mission Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_db_error;
use super::DbPool;
use crate::application::ports::{MissionRepositoryPort, RepositoryError};
use crate::domain::{Mission, NewMission};

pub(super) const SELECT_MISSION: &str =
    "SELECT id, name, scientist_id, planet_id FROM missions";

/// SQLite Mission Repository
pub struct SqliteMissionRepository {
    pool: DbPool,
}

impl SqliteMissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct MissionRow {
    id: i64,
    name: String,
    scientist_id: i64,
    planet_id: i64,
}

impl From<MissionRow> for Mission {
    fn from(row: MissionRow) -> Self {
        Mission::restore(row.id, row.name, row.scientist_id, row.planet_id)
    }
}

#[async_trait]
impl MissionRepositoryPort for SqliteMissionRepository {
    async fn insert(&self, mission: &NewMission) -> Result<Mission, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO missions (name, scientist_id, planet_id) VALUES (?, ?, ?)")
                .bind(mission.name())
                .bind(mission.scientist_id())
                .bind(mission.planet_id())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(mission.clone().with_id(result.last_insert_rowid()))
    }
}
