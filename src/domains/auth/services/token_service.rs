use std::sync::Arc;

use crate::domains::auth::models::token::{AuthToken, TokenType};
use crate::shared::database::repositories::auth::TokenRepository;
use crate::shared::database::StoreError;
use crate::shared::errors::AuthError;

// 토큰 서비스
// TokenService: issues and revokes device auth tokens
//
// Enforces "at most one active token per (user, type)". Issuance is
// idempotent: re-issuing before revocation returns the existing value, so the
// setup URL a user already entered on a device keeps working.
#[derive(Clone)]
pub struct TokenService {
    tokens: Arc<dyn TokenRepository>,
}

impl TokenService {
    pub fn new(tokens: Arc<dyn TokenRepository>) -> Self {
        Self { tokens }
    }

    /// 토큰 발급 (이미 있으면 기존 토큰 반환)
    /// Issue a token (returns the existing one unchanged if present)
    pub async fn issue(&self, user_id: i64) -> Result<AuthToken, AuthError> {
        // 1. 기존 활성 토큰 조회
        // Look up the existing active token
        if let Some(existing) = self
            .tokens
            .find_token_by_user(user_id, TokenType::KoboSync)
            .await?
        {
            return Ok(existing);
        }

        // 2. 새 토큰 생성 및 저장
        // Generate and persist a new token
        let token = AuthToken::new_sync_token(user_id);
        match self.tokens.insert(&token).await {
            Ok(()) => Ok(token),
            // 3. 동시 발급 경합에서 진 쪽은 이긴 쪽의 토큰을 다시 읽어 반환
            // A losing concurrent insert re-reads and returns the winner's token
            Err(StoreError::Duplicate) => self
                .tokens
                .find_token_by_user(user_id, TokenType::KoboSync)
                .await?
                .ok_or_else(|| {
                    AuthError::Internal(
                        "Token insert conflicted but no existing token found".to_string(),
                    )
                }),
            Err(err) => Err(err.into()),
        }
    }

    /// 토큰 무효화 (없으면 no-op)
    /// Revoke the user's token (no-op when none exists)
    ///
    /// The delete is committed before returning, so a device request
    /// presenting the revoked value afterwards is denied immediately.
    pub async fn revoke(&self, user_id: i64) -> Result<(), AuthError> {
        self.tokens
            .delete_by_user(user_id, TokenType::KoboSync)
            .await?;
        Ok(())
    }

    /// 토큰 값으로 조회 (요청 인증용)
    /// Resolve a token value (request authentication)
    pub async fn resolve(&self, token_value: &str) -> Result<Option<AuthToken>, AuthError> {
        Ok(self
            .tokens
            .find_token(token_value, TokenType::KoboSync)
            .await?)
    }
}
