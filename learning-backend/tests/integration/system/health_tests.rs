// tests/integration/system/health_tests.rs

use crate::common::{
    self,
    app_helper::{body_json, get_request, setup_app},
    mock_data_source::MockAnalyticsDataSource,
};
use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_environment() {
    common::init_test_env();
    let app = setup_app(Arc::new(MockAnalyticsDataSource::new()));

    let response = app
        .router
        .clone()
        .oneshot(get_request("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["environment"], "test");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    common::init_test_env();
    let app = setup_app(Arc::new(MockAnalyticsDataSource::new()));

    let response = app
        .router
        .clone()
        .oneshot(get_request("/no/such/route"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error_type"], "not_found");
}
