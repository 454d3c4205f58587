use anyhow::{Context, Result};
use sqlx::PgPool;

// 데이터베이스 연결 풀
// Database connection pool for PostgreSQL
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    // 데이터베이스 연결 생성
    // Create database connection
    pub async fn new(db_url: &str) -> Result<Self> {
        let pool = PgPool::connect(db_url)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }

    // 연결 풀 반환
    // Get connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // 테이블 생성 (초기화) - 마이그레이션 실행
    // Create tables (initialization) - Run migrations
    // migrations/ 폴더의 모든 .sql 파일을 순서대로 실행
    pub async fn initialize(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool())
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}
