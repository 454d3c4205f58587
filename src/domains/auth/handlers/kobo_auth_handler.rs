use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 토큰 설정 페이지 핸들러
/// Token setup page handler
///
/// Issues (or re-displays) the device auth token for `user_id` and renders the
/// fully-qualified setup URL the user enters on the device. Idempotent: a
/// second visit before revocation shows the same URL.
#[utoipa::path(
    get,
    path = "/kobo_auth/generate_auth_token/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User to issue the token for")
    ),
    responses(
        (status = 200, description = "Setup page containing the device URL", content_type = "text/html"),
        (status = 401, description = "Not logged in"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("SessionCookie" = [])
    ),
    tag = "KoboAuth"
)]
pub async fn generate_auth_token(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(user_id): Path<i64>,
) -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    let token = app_state
        .auth_state
        .token_service
        .issue(user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let setup_url = app_state.config.setup_url(&token.token_value);

    Ok(Html(render_setup_page(&setup_url)))
}

/// 토큰 무효화 핸들러
/// Token revocation handler
///
/// Deletes the active sync token for `user_id`; no-op when none exists. The
/// device presenting the old value afterwards is denied immediately.
#[utoipa::path(
    get,
    path = "/kobo_auth/deleteauthtoken/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User whose token is revoked")
    ),
    responses(
        (status = 200, description = "Token revoked (empty response)"),
        (status = 401, description = "Not logged in"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("SessionCookie" = [])
    ),
    tag = "KoboAuth"
)]
pub async fn delete_auth_token(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(user_id): Path<i64>,
) -> Result<String, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .token_service
        .revoke(user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    // 원본 동작과 동일하게 빈 본문 반환
    // Empty body on success
    Ok(String::new())
}

// 설정 페이지 렌더링 (템플릿 엔진 없이 최소 HTML)
// Render the setup page (minimal HTML, no template engine)
fn render_setup_page(setup_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Kobo Set-up</title></head>
<body>
<h1>Kobo Set-up</h1>
<p>Open the Kobo configuration file on your device and replace the api_store endpoint with:</p>
<p><code>{setup_url}</code></p>
</body>
</html>
"#
    )
}
