//! SQLite Planet Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_db_error;
use super::DbPool;
use crate::application::ports::{PlanetRepositoryPort, RepositoryError};
use crate::domain::{NewPlanet, Planet};

pub(super) const SELECT_PLANET: &str =
    "SELECT id, name, distance_from_earth, nearest_star FROM planets";

/// SQLite Planet Repository
pub struct SqlitePlanetRepository {
    pool: DbPool,
}

impl SqlitePlanetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct PlanetRow {
    id: i64,
    name: Option<String>,
    distance_from_earth: Option<i64>,
    nearest_star: Option<String>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet::restore(row.id, row.name, row.distance_from_earth, row.nearest_star)
    }
}

#[async_trait]
impl PlanetRepositoryPort for SqlitePlanetRepository {
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO planets (name, distance_from_earth, nearest_star) VALUES (?, ?, ?)",
        )
        .bind(planet.name())
        .bind(planet.distance_from_earth())
        .bind(planet.nearest_star())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(planet.clone().with_id(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, RepositoryError> {
        let row: Option<PlanetRow> = sqlx::query_as(
            "SELECT id, name, distance_from_earth, nearest_star FROM planets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Planet::from))
    }
}
