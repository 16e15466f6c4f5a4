//! Mission Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateMission;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GraphReaderPort, MissionRepositoryPort, PlanetRepositoryPort, RepositoryError,
    ScientistRepositoryPort,
};
use crate::application::serialization::{mission_to_dict, Dict};
use crate::domain::NewMission;

const INVALID_REFERENCE: &str = "Invalid scientist or planet ID";

/// CreateMission Handler
///
/// 顺序：必填检查 -> 引用存在性检查 -> 字段校验 -> 写入
pub struct CreateMissionHandler {
    scientist_repo: Arc<dyn ScientistRepositoryPort>,
    planet_repo: Arc<dyn PlanetRepositoryPort>,
    mission_repo: Arc<dyn MissionRepositoryPort>,
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl CreateMissionHandler {
    pub fn new(
        scientist_repo: Arc<dyn ScientistRepositoryPort>,
        planet_repo: Arc<dyn PlanetRepositoryPort>,
        mission_repo: Arc<dyn MissionRepositoryPort>,
        graph_reader: Arc<dyn GraphReaderPort>,
    ) -> Self {
        Self {
            scientist_repo,
            planet_repo,
            mission_repo,
            graph_reader,
        }
    }

    pub async fn handle(&self, command: CreateMission) -> Result<Dict, ApplicationError> {
        let name = command
            .name
            .ok_or_else(|| ApplicationError::validation("Name cannot be empty."))?;
        let scientist_id = command
            .scientist_id
            .ok_or_else(|| ApplicationError::validation("Scientist ID cannot be empty."))?;
        let planet_id = command
            .planet_id
            .ok_or_else(|| ApplicationError::validation("Planet ID cannot be empty."))?;

        let scientist = self.scientist_repo.find_by_id(scientist_id).await?;
        let planet = self.planet_repo.find_by_id(planet_id).await?;
        if scientist.is_none() || planet.is_none() {
            tracing::warn!(
                scientist_id = scientist_id,
                planet_id = planet_id,
                "Mission references missing scientist or planet"
            );
            return Err(ApplicationError::invalid_reference(INVALID_REFERENCE));
        }

        let new_mission = NewMission::new(name, Some(scientist_id), Some(planet_id))?;

        // 检查与写入之间父行被删除时，由外键约束兜底
        let mission = self
            .mission_repo
            .insert(&new_mission)
            .await
            .map_err(|e| match e {
                RepositoryError::Constraint(_) => {
                    ApplicationError::invalid_reference(INVALID_REFERENCE)
                }
                other => other.into(),
            })?;

        tracing::info!(
            mission_id = mission.id(),
            scientist_id = scientist_id,
            planet_id = planet_id,
            "Mission created"
        );

        let graph = self.graph_reader.load_mission_graph(mission.id()).await?;
        Ok(mission_to_dict(&mission, &graph))
    }
}
