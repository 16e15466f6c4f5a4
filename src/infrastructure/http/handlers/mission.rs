//! Mission HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::Dict;
use crate::infrastructure::http::dto::{CreateMissionRequest, PrettyJson};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建任务
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMissionRequest>, JsonRejection>,
) -> Result<(StatusCode, PrettyJson<Dict>), ApiError> {
    let Json(req) = payload?;

    let result = state.create_mission_handler.handle(req.into()).await?;

    Ok((StatusCode::CREATED, PrettyJson(result)))
}
