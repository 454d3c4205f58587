use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domains::auth::models::session::SessionClaims;
use crate::shared::errors::AuthError;

/// 세션 쿠키 이름
/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "library_session";

// 세션 수명 (시간)
const SESSION_HOURS: i64 = 24;

/// 세션 서비스
/// Session service: issues and verifies the signed session cookie
///
/// The cookie is established as a side effect of device token resolution and
/// as the result of a browser login. It authorizes subsequent requests in the
/// same session that do not carry the path token (e.g. generic downloads).
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    /// 세션 서비스 생성
    /// Create session service
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// 세션 토큰 발급 (서명된 쿠키 값)
    /// Issue a session token (signed cookie value)
    pub fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        let claims = SessionClaims::new(user_id, SESSION_HOURS);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// 세션 토큰 검증 → user_id
    /// Verify a session token → user_id
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidSession)?;

        Ok(token_data.claims.user_id)
    }

    /// Set-Cookie 헤더 값 생성 (세션 스코프, Max-Age 없음)
    /// Build the Set-Cookie header value (session scoped, no Max-Age)
    pub fn session_cookie(&self, user_id: i64) -> Result<String, AuthError> {
        let token = self.issue(user_id)?;
        Ok(format!(
            "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax"
        ))
    }

    /// 쿠키 제거용 Set-Cookie 헤더 값
    /// Set-Cookie header value that clears the session cookie
    pub fn clear_cookie(&self) -> String {
        format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

/// Cookie 헤더에서 세션 토큰 추출
/// Extract the session token from a Cookie header value
pub fn session_token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE_NAME).then_some(value)
    })
}
