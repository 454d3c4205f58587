// Routes module: combines all domain routers and the identity middleware
// 역할: 모든 도메인의 라우터를 조합하고 신원 미들웨어를 적용

use axum::{Extension, Router, middleware};
use tower::ServiceBuilder;

use crate::domains::auth::routes::{create_kobo_auth_router, create_session_router};
use crate::domains::sync::routes::create_device_router;
use crate::shared::middleware::auth::AuthPolicy;
use crate::shared::middleware::identity::{resolve_identity, stash_auth_token};
use crate::shared::services::AppState;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
///
/// Auth failure policy is attached per route group: device endpoints answer
/// with a plain 401, browser-facing pages redirect to the login page. The
/// token-stash middleware must run before identity resolution, so it sits
/// first in the `ServiceBuilder` stack.
pub fn create_router(state: AppState) -> Router<AppState> {
    let kobo_auth =
        create_kobo_auth_router().layer(Extension(AuthPolicy::RedirectToLogin));
    let session = create_session_router().layer(Extension(AuthPolicy::Deny));
    let device = create_device_router().layer(Extension(AuthPolicy::Deny));

    Router::new()
        .nest("/kobo_auth", kobo_auth)
        .merge(session)
        .merge(device)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(stash_auth_token))
                .layer(middleware::from_fn_with_state(state, resolve_identity)),
        )
}
