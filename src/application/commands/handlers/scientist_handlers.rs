//! Scientist Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateScientist, DeleteScientist, UpdateScientist};
use crate::application::error::ApplicationError;
use crate::application::ports::{GraphReaderPort, ScientistRepositoryPort};
use crate::application::serialization::{scientist_to_dict, Dict};
use crate::domain::{NewScientist, Scientist};

/// 渲染单个科学家（只加载该科学家的子图）
async fn render_scientist(
    graph_reader: &dyn GraphReaderPort,
    scientist: &Scientist,
) -> Result<Dict, ApplicationError> {
    let graph = graph_reader.load_scientist_graph(scientist.id()).await?;
    Ok(scientist_to_dict(scientist, &graph))
}

// ============================================================================
// CreateScientist
// ============================================================================

/// CreateScientist Handler
pub struct CreateScientistHandler {
    scientist_repo: Arc<dyn ScientistRepositoryPort>,
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl CreateScientistHandler {
    pub fn new(
        scientist_repo: Arc<dyn ScientistRepositoryPort>,
        graph_reader: Arc<dyn GraphReaderPort>,
    ) -> Self {
        Self {
            scientist_repo,
            graph_reader,
        }
    }

    pub async fn handle(&self, command: CreateScientist) -> Result<Dict, ApplicationError> {
        let name = command
            .name
            .ok_or_else(|| ApplicationError::validation("Name cannot be empty."))?;
        let field_of_study = command
            .field_of_study
            .ok_or_else(|| ApplicationError::validation("Field of study cannot be empty."))?;

        let new_scientist = NewScientist::new(name, field_of_study)?;
        let scientist = self.scientist_repo.insert(&new_scientist).await?;

        tracing::info!(
            scientist_id = scientist.id(),
            name = %scientist.name(),
            "Scientist created"
        );

        render_scientist(self.graph_reader.as_ref(), &scientist).await
    }
}

// ============================================================================
// UpdateScientist
// ============================================================================

/// UpdateScientist Handler - 部分更新
pub struct UpdateScientistHandler {
    scientist_repo: Arc<dyn ScientistRepositoryPort>,
    graph_reader: Arc<dyn GraphReaderPort>,
}

impl UpdateScientistHandler {
    pub fn new(
        scientist_repo: Arc<dyn ScientistRepositoryPort>,
        graph_reader: Arc<dyn GraphReaderPort>,
    ) -> Self {
        Self {
            scientist_repo,
            graph_reader,
        }
    }

    pub async fn handle(&self, command: UpdateScientist) -> Result<Dict, ApplicationError> {
        let scientist_id = command.scientist_id;

        let mut scientist = self
            .scientist_repo
            .find_by_id(scientist_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Scientist", scientist_id))?;

        if !command.patch.is_empty() {
            scientist.apply_patch(&command.patch)?;
            self.scientist_repo.update(&scientist).await?;

            tracing::info!(scientist_id = scientist_id, "Scientist updated");
        }

        render_scientist(self.graph_reader.as_ref(), &scientist).await
    }
}

// ============================================================================
// DeleteScientist
// ============================================================================

/// DeleteScientist Handler
pub struct DeleteScientistHandler {
    scientist_repo: Arc<dyn ScientistRepositoryPort>,
}

impl DeleteScientistHandler {
    pub fn new(scientist_repo: Arc<dyn ScientistRepositoryPort>) -> Self {
        Self { scientist_repo }
    }

    pub async fn handle(&self, command: DeleteScientist) -> Result<(), ApplicationError> {
        let scientist_id = command.scientist_id;

        // 检查科学家是否存在
        let scientist = self
            .scientist_repo
            .find_by_id(scientist_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Scientist", scientist_id))?;

        let missions_deleted = self.scientist_repo.delete(scientist_id).await?;

        tracing::info!(
            scientist_id = scientist_id,
            name = %scientist.name(),
            missions_deleted = missions_deleted,
            "Scientist deleted"
        );

        Ok(())
    }
}
