// 통합 테스트 공통 설정
// Shared setup for integration tests
//
// Builds the full router on top of the in-memory stores, seeded with one
// user, so tests exercise the real middleware/extractor stack without a
// database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use sync_server::domains::auth::models::User;
use sync_server::domains::auth::services::AuthService;
use sync_server::routes::create_router;
use sync_server::shared::config::Config;
use sync_server::shared::database::repositories::auth::{
    MemoryTokenRepository, MemoryUserRepository,
};
use sync_server::shared::services::AppState;

pub const TEST_USER_ID: i64 = 1;
pub const SECOND_USER_ID: i64 = 2;
pub const TEST_EMAIL: &str = "reader@example.com";
pub const TEST_PASSWORD: &str = "password123";
pub const PUBLIC_URL: &str = "https://mylibrary.example.com";

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        database_url: String::new(),
        public_url: PUBLIC_URL.to_string(),
        session_secret: "test-secret".to_string(),
    }
}

/// 시드된 앱과 상태 생성
/// Build a seeded app and its state
pub fn test_app() -> (Router, AppState) {
    let tokens = Arc::new(MemoryTokenRepository::new());
    let users = Arc::new(MemoryUserRepository::new());

    let password_hash = AuthService::hash_password(TEST_PASSWORD).expect("hash password");
    users.add(User {
        id: TEST_USER_ID,
        email: TEST_EMAIL.to_string(),
        username: Some("reader".to_string()),
        password_hash: password_hash.clone(),
    });
    users.add(User {
        id: SECOND_USER_ID,
        email: "writer@example.com".to_string(),
        username: None,
        password_hash,
    });

    let state = AppState::with_stores(tokens, users, test_config());
    let app = create_router(state.clone()).with_state(state.clone());

    (app, state)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// 응답의 Set-Cookie에서 세션 쿠키 추출 ("name=value" 형태)
/// Pull the session cookie out of Set-Cookie as a "name=value" pair
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("library_session="))
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("json body")
}

/// 설정 페이지 HTML에서 토큰 추출
/// Extract the token value from the setup page HTML
pub fn token_from_setup_page(html: &str) -> String {
    let prefix = format!("{PUBLIC_URL}/");
    let start = html.find(&prefix).expect("setup URL in page") + prefix.len();
    html[start..start + 32].to_string()
}
