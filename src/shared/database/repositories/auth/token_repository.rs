use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domains::auth::models::token::{AuthToken, TokenType};
use crate::shared::database::StoreError;

/// 디바이스 인증 토큰 저장소 인터페이스
/// Device auth token store interface
///
/// `find_token` runs on every device request, so implementations must back it
/// with an index on `token_value`. No other query shapes are required.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// 토큰 값 + 타입으로 정확히 한 행 조회
    /// Exact-match lookup by token value and type
    async fn find_token(
        &self,
        token_value: &str,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError>;

    /// 사용자의 활성 토큰 조회
    /// Find the active token for a user
    async fn find_token_by_user(
        &self,
        user_id: i64,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError>;

    /// 토큰 저장 (유니크 제약 위반 시 `StoreError::Duplicate`)
    /// Insert a token (`StoreError::Duplicate` on unique constraint violation)
    async fn insert(&self, token: &AuthToken) -> Result<(), StoreError>;

    /// 사용자의 토큰 삭제 (없으면 no-op)
    /// Delete the user's token(s) of this type (no-op when none exists)
    async fn delete_by_user(&self, user_id: i64, token_type: TokenType)
        -> Result<(), StoreError>;
}

/// Token Repository (PostgreSQL)
/// 토큰 데이터베이스 작업 처리
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn token_from_row(row: &sqlx::postgres::PgRow) -> Result<AuthToken, StoreError> {
        let token_type = TokenType::from_i16(row.get("token_type"))
            .ok_or_else(|| StoreError::Database("Unknown token_type in auth_tokens".to_string()))?;

        Ok(AuthToken {
            user_id: row.get("user_id"),
            token_value: row.get("token_value"),
            token_type,
            expiration: row.get("expiration"),
        })
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_token(
        &self,
        token_value: &str,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, token_value, token_type, expiration
            FROM auth_tokens
            WHERE token_value = $1 AND token_type = $2
            "#,
        )
        .bind(token_value)
        .bind(token_type as i16)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::token_from_row).transpose()
    }

    async fn find_token_by_user(
        &self,
        user_id: i64,
        token_type: TokenType,
    ) -> Result<Option<AuthToken>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, token_value, token_type, expiration
            FROM auth_tokens
            WHERE user_id = $1 AND token_type = $2
            "#,
        )
        .bind(user_id)
        .bind(token_type as i16)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::token_from_row).transpose()
    }

    async fn insert(&self, token: &AuthToken) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO auth_tokens (user_id, token_value, token_type, expiration)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.user_id)
        .bind(&token.token_value)
        .bind(token.token_type as i16)
        .bind(token.expiration)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_user(
        &self,
        user_id: i64,
        token_type: TokenType,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            DELETE FROM auth_tokens
            WHERE user_id = $1 AND token_type = $2
            "#,
        )
        .bind(user_id)
        .bind(token_type as i16)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
