use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domains::auth::models::user::User;
use crate::shared::database::StoreError;

/// 사용자 저장소 인터페이스 (이 서비스가 소비하는 외부 협력자)
/// User store interface (external collaborator consumed by this service)
#[async_trait]
pub trait UserRepository: Send + Sync {
    // ID로 사용자 조회
    // Get user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    // 이메일로 사용자 조회 (로그인용)
    // Get user by email (for login)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// User Repository (PostgreSQL)
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
        User {
            id: row.get("id"),
            email: row.get("email"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, username, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::user_from_row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, username, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::user_from_row))
    }
}
