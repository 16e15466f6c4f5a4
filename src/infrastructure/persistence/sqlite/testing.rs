//! 测试辅助：内存 SQLite 上的仓储集合

use std::sync::Arc;

use super::{
    create_pool, run_migrations, DatabaseConfig, DbPool, SqliteGraphReader,
    SqliteMissionRepository, SqlitePlanetRepository, SqliteScientistRepository,
};
use crate::application::ports::{PlanetRepositoryPort, ScientistRepositoryPort};
use crate::domain::{Mission, NewPlanet, NewScientist, Planet, Scientist};

pub struct TestStore {
    pool: DbPool,
}

impl TestStore {
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn scientists(&self) -> Arc<SqliteScientistRepository> {
        Arc::new(SqliteScientistRepository::new(self.pool.clone()))
    }

    pub fn planets(&self) -> Arc<SqlitePlanetRepository> {
        Arc::new(SqlitePlanetRepository::new(self.pool.clone()))
    }

    pub fn missions(&self) -> Arc<SqliteMissionRepository> {
        Arc::new(SqliteMissionRepository::new(self.pool.clone()))
    }

    pub fn graph(&self) -> Arc<SqliteGraphReader> {
        Arc::new(SqliteGraphReader::new(self.pool.clone()))
    }

    pub async fn scientist(&self, name: &str, field_of_study: &str) -> Scientist {
        let new_scientist = NewScientist::new(name, field_of_study).expect("valid scientist");
        self.scientists()
            .insert(&new_scientist)
            .await
            .expect("insert scientist")
    }

    pub async fn planet(&self, planet: NewPlanet) -> Planet {
        self.planets().insert(&planet).await.expect("insert planet")
    }

    /// missions 表中引用该科学家的行（按 id 排序），不经过 scientists 表
    pub async fn missions_of(&self, scientist_id: i64) -> Vec<Mission> {
        let rows: Vec<(i64, String, i64, i64)> = sqlx::query_as(
            "SELECT id, name, scientist_id, planet_id FROM missions WHERE scientist_id = ? ORDER BY id",
        )
        .bind(scientist_id)
        .fetch_all(&self.pool)
        .await
        .expect("select missions");

        rows.into_iter()
            .map(|(id, name, scientist_id, planet_id)| {
                Mission::restore(id, name, scientist_id, planet_id)
            })
            .collect()
    }
}
