// 디바이스 라우터
// Device-facing router
//
// Every route lives under the `/:auth_token/v1` prefix: the device appends its
// token to the base URL it was configured with, so the token arrives as the
// first path segment of each request.
use axum::{Router, routing::get};

use crate::domains::sync::handlers::sync_handler;
use crate::shared::services::AppState;

pub fn create_device_router() -> Router<AppState> {
    Router::new()
        .route("/:auth_token/v1/library/sync", get(sync_handler::library_sync))
        .route(
            "/:auth_token/v1/initialization",
            get(sync_handler::initialization),
        )
}
