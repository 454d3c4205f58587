use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Html, IntoResponse};

use crate::domains::auth::models::{LoginRequest, LoginResponse, UserResponse};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 로그인 페이지 (최소 폼)
/// Login page (minimal form)
pub async fn login_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Login</title></head>
<body>
<h1>Login</h1>
<p>POST credentials as JSON to /login.</p>
</body>
</html>
"#,
    )
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Session"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let user = app_state
        .auth_state
        .auth_service
        .login(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    // 세션 쿠키 발급
    // Issue the session cookie
    let cookie = app_state
        .auth_state
        .session_service
        .session_cookie(user.id)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            user: user.into(),
            message: "Login successful".to_string(),
        }),
    ))
}

/// 로그아웃 핸들러 (세션 쿠키 제거)
/// Logout handler (clears the session cookie)
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Logout successful, session cookie cleared")
    ),
    tag = "Session"
)]
pub async fn logout(State(app_state): State<AppState>) -> impl IntoResponse {
    let cookie = app_state.auth_state.session_service.clear_cookie();

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(serde_json::json!({ "message": "Logout successful" })),
    )
}

/// 현재 사용자 조회 핸들러
/// Current user info handler
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("SessionCookie" = [])
    ),
    tag = "Session"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .auth_service
        .get_user_info(authenticated_user.user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}
