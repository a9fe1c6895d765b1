// src/api/handlers/system_handler.rs
use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::ApiResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
}

/// 死活監視用。DB には触れない
pub async fn health_handler(State(app_state): State<AppState>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        environment: app_state.config.environment.clone(),
    })
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_state)
}
