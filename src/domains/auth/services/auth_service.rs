use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::domains::auth::models::session::LoginRequest;
use crate::domains::auth::models::user::User;
use crate::shared::database::repositories::auth::UserRepository;
use crate::shared::errors::AuthError;

// 인증 서비스
// AuthService: handles the browser login that precedes token setup
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    // 로그인 (비즈니스 로직)
    pub async fn login(&self, request: LoginRequest) -> Result<User, AuthError> {
        // 1. 이메일로 사용자 조회
        // Fetch the user by email
        let user = self.users.find_by_email(&request.email).await?;

        let user = match user {
            Some(u) => u,
            None => return Err(AuthError::InvalidCredentials),
        };

        // 2. 비밀번호 검증
        // Verify the password
        Self::verify_password(&request.password, &user.password_hash)?;

        Ok(user)
    }

    pub async fn get_user_info(&self, user_id: i64) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))
    }

    /// 비밀번호 해싱 (사용자 시드/생성용)
    /// Hash a password (user seeding/creation)
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}
