//! SQLite Database - 数据库连接和迁移

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/app.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 每个连接都开启外键约束（级联删除依赖它）
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        // 遇到锁时等待而不是立即失败
        .busy_timeout(Duration::from_millis(5000));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        // 内存库随连接关闭而消失，连接必须常驻
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    } else {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys enabled"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 scientists 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS scientists (
            id INTEGER NOT NULL,
            name TEXT NOT NULL,
            field_of_study TEXT NOT NULL,
            CONSTRAINT pk_scientists PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 planets 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id INTEGER NOT NULL,
            name TEXT,
            distance_from_earth INTEGER,
            nearest_star TEXT,
            CONSTRAINT pk_planets PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 missions 表（关联实体，父行删除时级联）
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS missions (
            id INTEGER NOT NULL,
            name TEXT NOT NULL,
            scientist_id INTEGER NOT NULL,
            planet_id INTEGER NOT NULL,
            CONSTRAINT pk_missions PRIMARY KEY (id),
            CONSTRAINT fk_missions_scientist_id_scientists
                FOREIGN KEY (scientist_id) REFERENCES scientists(id) ON DELETE CASCADE,
            CONSTRAINT fk_missions_planet_id_planets
                FOREIGN KEY (planet_id) REFERENCES planets(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 索引: 外键列（用于级联删除和关系解析）
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS ix_missions_scientist_id
        ON missions(scientist_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS ix_missions_planet_id
        ON missions(planet_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// sqlx 错误 -> 仓储错误
pub(crate) fn map_db_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::Constraint(db_err.message().to_string())
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}
