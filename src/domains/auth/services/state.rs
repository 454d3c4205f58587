// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;

use crate::domains::auth::services::{AuthService, SessionService, TokenService};
use crate::shared::database::repositories::auth::{TokenRepository, UserRepository};
use crate::shared::middleware::identity::{
    IdentityResolver, PathTokenResolver, SessionCookieResolver,
};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub token_service: TokenService,
    pub session_service: SessionService,

    /// 신원 결정 전략 체인 (순서대로 시도, 첫 성공이 이김)
    /// Identity resolution chain (tried in order, first hit wins)
    pub resolvers: Arc<Vec<Arc<dyn IdentityResolver>>>,
}

impl AuthState {
    /// Create AuthState from the store interfaces
    /// 저장소 인터페이스로부터 AuthState 생성
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        session_secret: &str,
    ) -> Self {
        let auth_service = AuthService::new(users.clone());
        let token_service = TokenService::new(tokens);
        let session_service = SessionService::new(session_secret);

        // 경로 토큰이 먼저, 세션 쿠키가 fallback
        // Path token first, session cookie as the fallback
        let resolvers: Vec<Arc<dyn IdentityResolver>> = vec![
            Arc::new(PathTokenResolver::new(
                token_service.clone(),
                users.clone(),
            )),
            Arc::new(SessionCookieResolver::new(session_service.clone(), users)),
        ];

        Self {
            auth_service,
            token_service,
            session_service,
            resolvers: Arc::new(resolvers),
        }
    }
}
