//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET     存活检查
//! - /scientists        GET     列出所有科学家
//! - /scientists        POST    创建科学家
//! - /scientists/:id    GET     获取科学家
//! - /scientists/:id    PATCH   部分更新科学家
//! - /scientists/:id    DELETE  删除科学家（级联删除任务）
//! - /planets           GET     列出所有行星
//! - /missions          POST    创建任务

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .nest("/scientists", scientist_routes())
        .route("/planets", get(handlers::list_planets))
        .route("/missions", post(handlers::create_mission))
}

/// Scientist 路由
fn scientist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_scientists).post(handlers::create_scientist),
        )
        .route(
            "/:id",
            get(handlers::get_scientist)
                .patch(handlers::update_scientist)
                .delete(handlers::delete_scientist),
        )
}
