// src/middleware/auth.rs

use crate::config::AppConfig;
use crate::domain::identity::UserClaims;
use crate::logging::RequestContext;
use crate::utils::jwt::JwtManager;
use axum::{
    extract::{OptionalFromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

/// アクセストークンを入れる Cookie 名
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
    pub access_token_cookie_name: String,
}

impl AuthMiddlewareConfig {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self {
            jwt_manager,
            access_token_cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
        }
    }
}

/// 認証済みユーザー情報を格納するエクステンション
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.claims.user_id
    }
}

/// 呼び出し元を識別するミドルウェア
///
/// トークンがなくても無効でもリクエストは通す。匿名として扱うかどうかは
/// ハンドラー側が `Option<AuthenticatedUser>` で判断する。
pub async fn identity_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    cookie_jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(&headers, &cookie_jar, &config.access_token_cookie_name)
    else {
        debug!(path = %request.uri().path(), "No access token, continuing anonymously");
        return next.run(request).await;
    };

    match config.jwt_manager.verify_access_token(&token) {
        Ok(access_claims) => {
            let user = AuthenticatedUser {
                claims: access_claims.user,
            };

            if let Some(context) = request.extensions_mut().get_mut::<RequestContext>() {
                context.user_id = Some(user.user_id());
            }
            request.extensions_mut().insert(user);
        }
        Err(e) => {
            warn!(
                path = %request.uri().path(),
                error = %e,
                "Invalid access token, continuing anonymously"
            );
        }
    }

    next.run(request).await
}

/// Authorization ヘッダー優先、なければ Cookie
fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    let cookie_token = cookie_jar
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty());

    auth_header.or(cookie_token)
}

/// CORS 設定。解釈できないオリジンは警告して無視する
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true) // Cookie送信を許可
        .max_age(Duration::from_secs(3600))
}

// --- Axum Extractors ---

impl<S> OptionalFromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AuthenticatedUser>().cloned())
    }
}
