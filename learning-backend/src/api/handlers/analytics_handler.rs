// src/api/handlers/analytics_handler.rs

use crate::api::AppState;
use crate::domain::analytics_report::AnalyticsReport;
use crate::error::AppResult;
use crate::logging::RequestContext;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{extract::State, routing::get, Extension, Router};

// --- Handler Functions ---

/// ログインユーザーの学習ダッシュボード
///
/// 未ログインや無効なトークンでもエラーにせず `data: null` を返す。
pub async fn get_dashboard_handler(
    State(app_state): State<AppState>,
    user: Option<AuthenticatedUser>,
    context: Option<Extension<RequestContext>>,
) -> AppResult<ApiResponse<AnalyticsReport>> {
    let report = app_state
        .analytics_service
        .compute_analytics(user.as_ref().map(AuthenticatedUser::user_id))
        .await?;

    let response = match report {
        Some(report) => ApiResponse::success(report),
        None => ApiResponse::empty(),
    };

    Ok(match context {
        Some(Extension(context)) => response.with_request_id(context.request_id),
        None => response,
    })
}

// --- Router Setup ---

pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/analytics/dashboard", get(get_dashboard_handler))
        .with_state(app_state)
}
