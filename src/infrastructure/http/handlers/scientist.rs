//! Scientist HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    DeleteScientist, Dict, GetScientist, ListScientists, UpdateScientist,
};
use crate::infrastructure::http::dto::{
    CreateScientistRequest, PrettyJson, UpdateScientistRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有科学家
pub async fn list_scientists(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<Vec<Dict>>, ApiError> {
    let result = state.list_scientists_handler.handle(ListScientists).await?;
    Ok(PrettyJson(result))
}

/// 创建科学家
pub async fn create_scientist(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateScientistRequest>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Dict>), ApiError> {
    let Json(req) = payload?;

    let result = state.create_scientist_handler.handle(req.into()).await?;

    Ok((StatusCode::CREATED, PrettyJson(result)))
}

/// 获取科学家详情
pub async fn get_scientist(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<PrettyJson<Dict>, ApiError> {
    let Path(scientist_id) = id?;

    let result = state
        .get_scientist_handler
        .handle(GetScientist { scientist_id })
        .await?;

    Ok(PrettyJson(result))
}

/// 部分更新科学家
pub async fn update_scientist(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateScientistRequest>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Dict>), ApiError> {
    let Path(scientist_id) = id?;
    let Json(req) = payload?;

    let command = UpdateScientist {
        scientist_id,
        patch: req.into(),
    };
    let result = state.update_scientist_handler.handle(command).await?;

    Ok((StatusCode::ACCEPTED, PrettyJson(result)))
}

/// 删除科学家（级联删除其任务）
pub async fn delete_scientist(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(scientist_id) = id?;

    state
        .delete_scientist_handler
        .handle(DeleteScientist { scientist_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
