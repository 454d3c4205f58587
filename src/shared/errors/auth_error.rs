use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::shared::database::StoreError;

/// 인증 관련 에러
/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// 이메일 또는 비밀번호 불일치
    /// Wrong email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 세션 쿠키 검증 실패
    /// Session cookie verification failed
    #[error("Invalid session")]
    InvalidSession,

    /// 존재하지 않는 사용자
    /// User does not exist
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::DatabaseError(err.to_string())
    }
}

// 핸들러에서 `e.into()`로 (StatusCode, Json) 응답 변환
// Handlers convert errors into (StatusCode, Json) responses via `e.into()`
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::InvalidCredentials | AuthError::InvalidSession => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::DatabaseError(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 인프라 에러의 상세 내용은 응답에 싣지 않음
        // Infrastructure error details stay out of the response body
        let message = match &err {
            AuthError::DatabaseError(_) | AuthError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message })))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Json<serde_json::Value>) = self.into();
        (status, body).into_response()
    }
}
