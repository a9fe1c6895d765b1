// tests/common/app_helper.rs

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    Router,
};
use learning_backend::{
    api::{app_router, AppState},
    config::AppConfig,
    domain::identity::UserClaims,
    repository::analytics_data_source::AnalyticsDataSource,
    service::analytics_service::AnalyticsService,
    utils::jwt::JwtManager,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// テスト用アプリ一式
pub struct TestApp {
    pub router: Router,
    pub jwt_manager: Arc<JwtManager>,
}

impl TestApp {
    /// ユーザーのアクセストークンを発行
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.jwt_manager
            .generate_access_token(UserClaims {
                user_id,
                username: "learner".to_string(),
                email: "learner@example.com".to_string(),
            })
            .unwrap()
    }
}

/// 任意のデータソースでアプリを組み立てる
pub fn setup_app(source: Arc<dyn AnalyticsDataSource>) -> TestApp {
    let config = Arc::new(AppConfig::for_testing());
    let jwt_manager = Arc::new(JwtManager::new(config.jwt.clone()).unwrap());
    let analytics_service = Arc::new(AnalyticsService::new(
        source,
        config.analytics_time_zone,
    ));

    TestApp {
        router: app_router(AppState::new(
            analytics_service,
            jwt_manager.clone(),
            config,
        )),
        jwt_manager,
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn bearer_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn cookie_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("access_token={}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
