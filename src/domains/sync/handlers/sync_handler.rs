use axum::Json;
use axum::extract::State;
use serde_json::json;

use crate::domains::sync::models::{InitializationResponse, LibrarySyncResponse};
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 라이브러리 동기화 핸들러 (디바이스 요청)
/// Library sync handler (device request)
///
/// Representative protected endpoint of the device family: reachable only
/// through `/{auth_token}/v1/...`, identity comes from the path token (or the
/// session cookie established by a previous token-bearing request).
#[utoipa::path(
    get,
    path = "/{auth_token}/v1/library/sync",
    params(
        ("auth_token" = String, Path, description = "Device auth token (32 hex chars)")
    ),
    responses(
        (status = 200, description = "Sync result for the authenticated user", body = LibrarySyncResponse),
        (status = 401, description = "Unknown or missing auth token")
    ),
    tag = "Sync"
)]
pub async fn library_sync(
    State(_app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Json<LibrarySyncResponse> {
    Json(LibrarySyncResponse {
        user_id: authenticated_user.user_id,
        entitlements: Vec::new(),
        continuation_token: None,
    })
}

/// 디바이스 초기화 핸들러
/// Device initialization handler
#[utoipa::path(
    get,
    path = "/{auth_token}/v1/initialization",
    params(
        ("auth_token" = String, Path, description = "Device auth token (32 hex chars)")
    ),
    responses(
        (status = 200, description = "Resource map for the device", body = InitializationResponse),
        (status = 401, description = "Unknown or missing auth token")
    ),
    tag = "Sync"
)]
pub async fn initialization(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
) -> Json<InitializationResponse> {
    let base = app_state.config.public_url.trim_end_matches('/').to_string();

    Json(InitializationResponse {
        resources: json!({
            "library_sync": format!("{base}/v1/library/sync"),
            "image_host": base,
        }),
    })
}
