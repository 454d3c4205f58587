use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::auth::models::user::UserResponse;

/// 세션 쿠키 Claims (쿠키 값에 포함될 데이터)
/// Session cookie claims (data carried by the cookie value)
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 사용자 ID
    /// User ID
    pub user_id: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl SessionClaims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new claims (expiration time automatically calculated)
    pub fn new(user_id: i64, expiration_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + (expiration_hours * 3600); // hours to seconds

        Self { user_id, exp, iat: now }
    }
}

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password
    /// 비밀번호
    #[schema(example = "password123")]
    pub password: String,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// User information (without password)
    /// 사용자 정보 (비밀번호 제외)
    pub user: UserResponse,

    /// Success message
    /// 성공 메시지
    pub message: String,
}
