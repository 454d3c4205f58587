// 인증 라우터
// Authentication routers
use axum::{
    Router,
    routing::{get, post},
};

use crate::domains::auth::handlers::{kobo_auth_handler, session_handler};
use crate::shared::services::AppState;

// 토큰 설정/무효화 라우터 (브라우저용, 세션 인증 필요)
// Token setup/revocation router (browser-facing, session authenticated)
pub fn create_kobo_auth_router() -> Router<AppState> {
    Router::new()
        .route(
            "/generate_auth_token/:user_id",
            get(kobo_auth_handler::generate_auth_token),
        )
        .route(
            "/deleteauthtoken/:user_id",
            get(kobo_auth_handler::delete_auth_token),
        )
}

// 세션 라우터 (로그인/로그아웃)
// Session router (login/logout)
pub fn create_session_router() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(session_handler::login_page).post(session_handler::login),
        )
        .route("/logout", post(session_handler::logout))
        .route("/me", get(session_handler::get_me))
}
