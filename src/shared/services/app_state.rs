use std::sync::Arc;

use crate::domains::auth::services::AuthState;
use crate::shared::config::Config;
use crate::shared::database::Database;
use crate::shared::database::repositories::auth::{
    PgTokenRepository, PgUserRepository, TokenRepository, UserRepository,
};

/// Application state
/// 애플리케이션 상태 (설정 + 도메인 상태 조합)
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
}

impl AppState {
    /// Create AppState backed by PostgreSQL
    /// PostgreSQL 기반 AppState 생성
    pub fn new(db: Database, config: Config) -> Self {
        let tokens: Arc<dyn TokenRepository> =
            Arc::new(PgTokenRepository::new(db.pool().clone()));
        let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(db.pool().clone()));

        Self::with_stores(tokens, users, config)
    }

    /// Create AppState from explicit store implementations
    /// 명시적 저장소 구현으로 AppState 생성 (테스트/인메모리 모드)
    pub fn with_stores(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        config: Config,
    ) -> Self {
        let auth_state = AuthState::new(tokens, users, &config.session_secret);

        Self { config, auth_state }
    }
}
