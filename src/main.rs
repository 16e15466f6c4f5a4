//! Cosmos - 科学家、行星与任务的 CRUD 服务
//!
//! - Domain: scientist/, planet/, mission/
//! - Application: commands, queries, ports, serialization
//! - Infrastructure: http, persistence

use std::sync::Arc;

use cosmos::config::{load_config, print_config, LogConfig};
use cosmos::infrastructure::http::{AppState, HttpServer, ServerConfig};
use cosmos::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteGraphReader, SqliteMissionRepository,
    SqlitePlanetRepository, SqliteScientistRepository,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},cosmos={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Cosmos - scientists, planets and missions");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = config
        .database
        .file_path()
        .and_then(|path| std::path::Path::new(path).parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let scientist_repo = Arc::new(SqliteScientistRepository::new(pool.clone()));
    let planet_repo = Arc::new(SqlitePlanetRepository::new(pool.clone()));
    let mission_repo = Arc::new(SqliteMissionRepository::new(pool.clone()));
    let graph_reader = Arc::new(SqliteGraphReader::new(pool.clone()));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(scientist_repo, planet_repo, mission_repo, graph_reader);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
