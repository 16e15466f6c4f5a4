//! Planet HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::{Dict, ListPlanets};
use crate::infrastructure::http::dto::PrettyJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有行星
pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<Vec<Dict>>, ApiError> {
    let result = state.list_planets_handler.handle(ListPlanets).await?;
    Ok(PrettyJson(result))
}
