//! SQLite Graph Reader

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::database::map_db_error;
use super::mission_repo::{MissionRow, SELECT_MISSION};
use super::planet_repo::{PlanetRow, SELECT_PLANET};
use super::scientist_repo::{ScientistRow, SELECT_SCIENTIST};
use super::DbPool;
use crate::application::ports::{GraphReaderPort, RepositoryError};
use crate::application::serialization::EntityGraph;
use crate::domain::{Mission, Planet, Scientist};

/// 在单个读事务中加载实体图（全量或按实体裁剪的子图）
pub struct SqliteGraphReader {
    pool: DbPool,
}

impl SqliteGraphReader {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// 查询全部行，按 id 排序
async fn fetch_all<T>(conn: &mut SqliteConnection, select: &str) -> Result<Vec<T>, RepositoryError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select);
    builder.push(" ORDER BY id");
    builder
        .build_query_as::<T>()
        .fetch_all(conn)
        .await
        .map_err(map_db_error)
}

/// 查询 `column IN (ids)` 的行，按 id 排序；ids 为空时不访问数据库
async fn fetch_where_in<T>(
    conn: &mut SqliteConnection,
    select: &str,
    column: &str,
    ids: &BTreeSet<i64>,
) -> Result<Vec<T>, RepositoryError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select);
    builder.push(" WHERE ").push(column).push(" IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY id");

    builder
        .build_query_as::<T>()
        .fetch_all(conn)
        .await
        .map_err(map_db_error)
}

fn into_graph(
    scientists: Vec<ScientistRow>,
    planets: Vec<PlanetRow>,
    missions: Vec<Mission>,
) -> EntityGraph {
    EntityGraph::new(
        scientists.into_iter().map(Scientist::from).collect(),
        planets.into_iter().map(Planet::from).collect(),
        missions,
    )
}

#[async_trait]
impl GraphReaderPort for SqliteGraphReader {
    async fn load_graph(&self) -> Result<EntityGraph, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let scientists: Vec<ScientistRow> = fetch_all(&mut *tx, SELECT_SCIENTIST).await?;
        let planets: Vec<PlanetRow> = fetch_all(&mut *tx, SELECT_PLANET).await?;
        let missions: Vec<MissionRow> = fetch_all(&mut *tx, SELECT_MISSION).await?;

        tx.commit().await.map_err(map_db_error)?;

        tracing::debug!(
            scientists = scientists.len(),
            planets = planets.len(),
            missions = missions.len(),
            "Entity graph loaded"
        );

        Ok(into_graph(
            scientists,
            planets,
            missions.into_iter().map(Mission::from).collect(),
        ))
    }

    async fn load_scientist_graph(
        &self,
        scientist_id: i64,
    ) -> Result<EntityGraph, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let scientist_ids = BTreeSet::from([scientist_id]);

        let scientists: Vec<ScientistRow> =
            fetch_where_in(&mut *tx, SELECT_SCIENTIST, "id", &scientist_ids).await?;
        if scientists.is_empty() {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(EntityGraph::default());
        }

        let missions: Vec<Mission> =
            fetch_where_in::<MissionRow>(&mut *tx, SELECT_MISSION, "scientist_id", &scientist_ids)
                .await?
                .into_iter()
                .map(Mission::from)
                .collect();
        let planet_ids: BTreeSet<i64> = missions.iter().map(|m| m.planet_id()).collect();
        let planets: Vec<PlanetRow> =
            fetch_where_in(&mut *tx, SELECT_PLANET, "id", &planet_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        tracing::debug!(
            scientist_id = scientist_id,
            missions = missions.len(),
            planets = planets.len(),
            "Scientist graph loaded"
        );

        Ok(into_graph(scientists, planets, missions))
    }

    async fn load_mission_graph(&self, mission_id: i64) -> Result<EntityGraph, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let target: Option<Mission> = fetch_where_in::<MissionRow>(
            &mut *tx,
            SELECT_MISSION,
            "id",
            &BTreeSet::from([mission_id]),
        )
        .await?
        .into_iter()
        .next()
        .map(Mission::from);
        let Some(target) = target else {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(EntityGraph::default());
        };

        // 行星下的所有任务决定了 planet.scientists
        let planet_missions: Vec<MissionRow> = fetch_where_in(
            &mut *tx,
            SELECT_MISSION,
            "planet_id",
            &BTreeSet::from([target.planet_id()]),
        )
        .await?;
        let mut scientist_ids: BTreeSet<i64> = planet_missions
            .into_iter()
            .map(|row| Mission::from(row).scientist_id())
            .collect();
        scientist_ids.insert(target.scientist_id());

        // 这些科学家的全部任务决定了 scientist.planets，且包含上面的行星任务
        let missions: Vec<Mission> =
            fetch_where_in::<MissionRow>(&mut *tx, SELECT_MISSION, "scientist_id", &scientist_ids)
                .await?
                .into_iter()
                .map(Mission::from)
                .collect();
        let mut planet_ids: BTreeSet<i64> = missions.iter().map(|m| m.planet_id()).collect();
        planet_ids.insert(target.planet_id());

        let scientists: Vec<ScientistRow> =
            fetch_where_in(&mut *tx, SELECT_SCIENTIST, "id", &scientist_ids).await?;
        let planets: Vec<PlanetRow> =
            fetch_where_in(&mut *tx, SELECT_PLANET, "id", &planet_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        tracing::debug!(
            mission_id = mission_id,
            scientists = scientists.len(),
            planets = planets.len(),
            missions = missions.len(),
            "Mission graph loaded"
        );

        Ok(into_graph(scientists, planets, missions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MissionRepositoryPort;
    use crate::application::serialization::{mission_to_dict, scientist_to_dict};
    use crate::domain::{NewMission, NewPlanet};
    use crate::infrastructure::persistence::sqlite::testing::TestStore;

    struct Fixture {
        store: TestStore,
        ada: Scientist,
        grace: Scientist,
        mars: Planet,
        ares: Mission,
    }

    /// Ada -> Mars, Ada -> Kepler, Grace -> Mars, Linus -> Venus
    async fn fixture() -> Fixture {
        let store = TestStore::new().await;
        let ada = store.scientist("Ada", "Physics").await;
        let grace = store.scientist("Grace", "Computing").await;
        let linus = store.scientist("Linus", "Kernels").await;
        let mars = store.planet(NewPlanet::new("Mars", 225, "Sun")).await;
        let kepler = store
            .planet(NewPlanet::new("Kepler-22b", 600, "Kepler-22"))
            .await;
        let venus = store.planet(NewPlanet::new("Venus", 40, "Sun")).await;

        let mut inserted = Vec::new();
        for (name, scientist, planet) in [
            ("Ares", &ada, &mars),
            ("Kepler", &ada, &kepler),
            ("Olympus", &grace, &mars),
            ("Venera", &linus, &venus),
        ] {
            let mission = NewMission::new(name, Some(scientist.id()), Some(planet.id())).unwrap();
            inserted.push(store.missions().insert(&mission).await.unwrap());
        }

        Fixture {
            store,
            ada,
            grace,
            mars,
            ares: inserted.remove(0),
        }
    }

    #[tokio::test]
    async fn test_load_graph() {
        let f = fixture().await;
        let graph = f.store.graph().load_graph().await.unwrap();

        assert_eq!(graph.scientist(f.ada.id()), Some(&f.ada));
        assert_eq!(graph.planet(f.mars.id()), Some(&f.mars));
        assert_eq!(graph.mission(f.ares.id()), Some(&f.ares));
        assert_eq!(graph.scientists().count(), 3);
        assert_eq!(graph.planets().count(), 3);
    }

    #[tokio::test]
    async fn test_load_empty_graph() {
        let store = TestStore::new().await;
        let graph = store.graph().load_graph().await.unwrap();
        assert_eq!(graph.scientists().count(), 0);
        assert_eq!(graph.planets().count(), 0);
    }

    #[tokio::test]
    async fn test_scientist_graph_is_scoped() {
        let f = fixture().await;
        let graph = f.store.graph().load_scientist_graph(f.ada.id()).await.unwrap();

        let scientist_ids: Vec<i64> = graph.scientists().map(|s| s.id()).collect();
        assert_eq!(scientist_ids, vec![f.ada.id()]);
        assert_eq!(graph.planets().count(), 2);
        assert_eq!(graph.missions_of_scientist(f.ada.id()).len(), 2);
        assert!(graph.scientist(f.grace.id()).is_none());
    }

    #[tokio::test]
    async fn test_scientist_graph_renders_like_full_graph() {
        let f = fixture().await;
        let full = f.store.graph().load_graph().await.unwrap();
        let scoped = f.store.graph().load_scientist_graph(f.ada.id()).await.unwrap();

        assert_eq!(
            scientist_to_dict(scoped.scientist(f.ada.id()).unwrap(), &scoped),
            scientist_to_dict(full.scientist(f.ada.id()).unwrap(), &full)
        );
    }

    #[tokio::test]
    async fn test_mission_graph_renders_like_full_graph() {
        let f = fixture().await;
        let full = f.store.graph().load_graph().await.unwrap();
        let scoped = f.store.graph().load_mission_graph(f.ares.id()).await.unwrap();

        assert_eq!(
            mission_to_dict(scoped.mission(f.ares.id()).unwrap(), &scoped),
            mission_to_dict(full.mission(f.ares.id()).unwrap(), &full)
        );
        // Venus 与 Linus 和这条任务无关
        assert_eq!(scoped.scientists().count(), 2);
        assert_eq!(scoped.planets().count(), 2);
    }

    #[tokio::test]
    async fn test_missing_entity_gives_empty_graph() {
        let store = TestStore::new().await;

        let graph = store.graph().load_scientist_graph(42).await.unwrap();
        assert_eq!(graph.scientists().count(), 0);

        let graph = store.graph().load_mission_graph(42).await.unwrap();
        assert!(graph.mission(42).is_none());
        assert_eq!(graph.planets().count(), 0);
    }
}
