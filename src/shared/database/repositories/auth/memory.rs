//! In-memory store implementations.
//!
//! Back the same traits as the PostgreSQL repositories and enforce the same
//! uniqueness invariants, so the token issuance race behaves identically.
//! Used by the integration tests and usable as an ephemeral backend.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domains::auth::models::token::{AuthToken, TokenType};
use crate::domains::auth::models::user::User;
use crate::shared::database::repositories::auth::{TokenRepository, UserRepository};
use crate::shared::database::StoreError;

/// 인메모리 토큰 저장소
/// In-memory token store
#[derive(Default)]
pub struct MemoryTokenRepository {
    rows: Mutex<Vec<AuthToken>>,
}

impl MemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 행 개수 (테스트 검증용)
    /// Number of stored rows (for test assertions)
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn find_token(
        &self,
        token_value: &str,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError> {
        let rows = self.rows.lock();
        Ok(rows
            .iter()
            .find(|t| t.token_value == token_value && t.token_type == token_type)
            .cloned())
    }

    async fn find_token_by_user(
        &self,
        user_id: i64,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError> {
        let rows = self.rows.lock();
        Ok(rows
            .iter()
            .find(|t| t.user_id == user_id && t.token_type == token_type)
            .cloned())
    }

    async fn insert(&self, token: &AuthToken) -> Result<(), StoreError> {
        let mut rows = self.rows.lock();

        // 스키마 레벨 유니크 제약과 동일하게 동작
        // Mirrors the schema-level unique constraints
        let duplicate = rows.iter().any(|t| {
            t.token_value == token.token_value
                || (t.user_id == token.user_id && t.token_type == token.token_type)
        });
        if duplicate {
            return Err(StoreError::Duplicate);
        }

        rows.push(token.clone());
        Ok(())
    }

    async fn delete_by_user(
        &self,
        user_id: i64,
        token_type: TokenType,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.lock();
        rows.retain(|t| !(t.user_id == user_id && t.token_type == token_type));
        Ok(())
    }
}

/// 인메모리 사용자 저장소
/// In-memory user store
#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 추가 (테스트 시드용)
    /// Add a user (test seeding)
    pub fn add(&self, user: User) {
        self.rows.lock().push(user);
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.rows.lock().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.rows.lock().iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::models::token::sync_token_expiration;

    fn token(user_id: i64, value: &str) -> AuthToken {
        AuthToken {
            user_id,
            token_value: value.to_string(),
            token_type: TokenType::KoboSync,
            expiration: sync_token_expiration(),
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_token_value() {
        let repo = MemoryTokenRepository::new();
        repo.insert(&token(1, "aa")).await.unwrap();

        let err = repo.insert(&token(2, "aa")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
    }

    #[tokio::test]
    async fn insert_rejects_second_token_for_same_user_and_type() {
        let repo = MemoryTokenRepository::new();
        repo.insert(&token(1, "aa")).await.unwrap();

        let err = repo.insert(&token(1, "bb")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn delete_by_user_is_noop_when_absent() {
        let repo = MemoryTokenRepository::new();
        repo.delete_by_user(42, TokenType::KoboSync).await.unwrap();
        assert!(repo.is_empty());
    }
}
