// src/api/mod.rs
use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, identity_middleware, AuthMiddlewareConfig};
use crate::service::analytics_service::AnalyticsService;
use crate::utils::jwt::JwtManager;
use axum::{http::Uri, middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
    pub jwt_manager: Arc<JwtManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        analytics_service: Arc<AnalyticsService>,
        jwt_manager: Arc<JwtManager>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            analytics_service,
            jwt_manager,
            config,
        }
    }
}

/// 全ルートとミドルウェアを組み立てる
///
/// 実行順は CORS → Trace → RequestContext 付与 → 認証 → ロギング → ハンドラー。
pub fn app_router(app_state: AppState) -> Router {
    let auth_config = AuthMiddlewareConfig::new(app_state.jwt_manager.clone());
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(handlers::analytics_handler::analytics_router(app_state.clone()))
        .merge(handlers::system_handler::system_router(app_state))
        .fallback(not_found_handler)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn_with_state(
            auth_config,
            identity_middleware,
        ))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
