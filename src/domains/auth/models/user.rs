use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 모델 (DB 저장용)
/// User model (for database storage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
}

/// 사용자 응답 모델 (비밀번호 해시 제외)
/// User response model (without password hash)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    pub id: i64,

    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Username (optional)
    /// 사용자명 (선택사항)
    #[schema(example = "johndoe")]
    pub username: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}
