//! SQLite Scientist Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_db_error;
use super::DbPool;
use crate::application::ports::{RepositoryError, ScientistRepositoryPort};
use crate::domain::{NewScientist, Scientist};

pub(super) const SELECT_SCIENTIST: &str = "SELECT id, name, field_of_study FROM scientists";

/// SQLite Scientist Repository
pub struct SqliteScientistRepository {
    pool: DbPool,
}

impl SqliteScientistRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct ScientistRow {
    id: i64,
    name: String,
    field_of_study: String,
}

impl From<ScientistRow> for Scientist {
    fn from(row: ScientistRow) -> Self {
        Scientist::restore(row.id, row.name, row.field_of_study)
    }
}

#[async_trait]
impl ScientistRepositoryPort for SqliteScientistRepository {
    async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, RepositoryError> {
        let result = sqlx::query("INSERT INTO scientists (name, field_of_study) VALUES (?, ?)")
            .bind(scientist.name())
            .bind(scientist.field_of_study())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(scientist.clone().with_id(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, RepositoryError> {
        let row: Option<ScientistRow> =
            sqlx::query_as("SELECT id, name, field_of_study FROM scientists WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(row.map(Scientist::from))
    }

    async fn update(&self, scientist: &Scientist) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE scientists SET name = ?, field_of_study = ? WHERE id = ?")
            .bind(scientist.name())
            .bind(scientist.field_of_study())
            .bind(scientist.id())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "scientist {}",
                scientist.id()
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        // 使用事务确保原子性，任一步失败时随 tx 释放回滚
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // 删除关联的 missions
        let missions = sqlx::query("DELETE FROM missions WHERE scientist_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // 删除 scientist
        sqlx::query("DELETE FROM scientists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(missions.rows_affected())
    }
}
