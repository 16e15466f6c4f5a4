//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateMissionHandler, CreateScientistHandler, DeleteScientistHandler, UpdateScientistHandler,
    // Query handlers
    GetScientistHandler, ListPlanetsHandler, ListScientistsHandler,
    // Ports
    GraphReaderPort, MissionRepositoryPort, PlanetRepositoryPort, ScientistRepositoryPort,
};

/// 应用状态
///
/// 仓储通过构造函数显式注入；连接由连接池按请求借出并归还
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_scientist_handler: CreateScientistHandler,
    pub update_scientist_handler: UpdateScientistHandler,
    pub delete_scientist_handler: DeleteScientistHandler,
    pub create_mission_handler: CreateMissionHandler,

    // ========== Query Handlers ==========
    pub get_scientist_handler: GetScientistHandler,
    pub list_scientists_handler: ListScientistsHandler,
    pub list_planets_handler: ListPlanetsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        scientist_repo: Arc<dyn ScientistRepositoryPort>,
        planet_repo: Arc<dyn PlanetRepositoryPort>,
        mission_repo: Arc<dyn MissionRepositoryPort>,
        graph_reader: Arc<dyn GraphReaderPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_scientist_handler: CreateScientistHandler::new(
                scientist_repo.clone(),
                graph_reader.clone(),
            ),
            update_scientist_handler: UpdateScientistHandler::new(
                scientist_repo.clone(),
                graph_reader.clone(),
            ),
            delete_scientist_handler: DeleteScientistHandler::new(scientist_repo.clone()),
            create_mission_handler: CreateMissionHandler::new(
                scientist_repo,
                planet_repo,
                mission_repo,
                graph_reader.clone(),
            ),

            // Query handlers
            get_scientist_handler: GetScientistHandler::new(graph_reader.clone()),
            list_scientists_handler: ListScientistsHandler::new(graph_reader.clone()),
            list_planets_handler: ListPlanetsHandler::new(graph_reader),
        }
    }
}
