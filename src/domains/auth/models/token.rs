use chrono::{DateTime, TimeZone, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::Serialize;

/// 토큰 값 길이 (16바이트를 hex 인코딩한 32자)
/// Token value length (16 random bytes, hex encoded to 32 chars)
pub const TOKEN_VALUE_LEN: usize = 32;

/// 토큰 용도 구분자 (저장 시 SMALLINT)
/// Token purpose discriminator (stored as SMALLINT)
///
/// New token kinds get new variants; the storage schema stays unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i16)]
pub enum TokenType {
    /// Kobo 디바이스 동기화 bearer 토큰
    /// Kobo device sync bearer token
    KoboSync = 1,
}

impl TokenType {
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(TokenType::KoboSync),
            _ => None,
        }
    }
}

/// 디바이스 인증 토큰 (DB 저장용)
/// Device auth token (for database storage)
///
/// Knowing `token_value` is sufficient to authenticate as `user_id`; no other
/// secret gates the device endpoints. At most one active row exists per
/// (user_id, token_type).
#[derive(Debug, Clone, Serialize)]
pub struct AuthToken {
    pub user_id: i64,
    pub token_value: String,
    pub token_type: TokenType,
    pub expiration: DateTime<Utc>,
}

impl AuthToken {
    /// 새 동기화 토큰 생성 (만료 없음)
    /// Create a new sync token (never expires by time)
    pub fn new_sync_token(user_id: i64) -> Self {
        Self {
            user_id,
            token_value: generate_token_value(),
            token_type: TokenType::KoboSync,
            expiration: sync_token_expiration(),
        }
    }
}

/// 토큰 값 생성: CSPRNG 16바이트 → 소문자 hex 32자
/// Generate a token value: 16 CSPRNG bytes, lowercase hex (32 chars)
pub fn generate_token_value() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// 동기화 토큰 만료 시각 (far-future sentinel)
/// Sync token expiration (far-future sentinel)
///
/// Sync tokens never expire by time; invalidation is purely by deletion or
/// replacement. 9999-12-31 survives a PostgreSQL timestamptz round trip
/// unchanged, unlike chrono's own maximum.
pub fn sync_token_expiration() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59) {
        chrono::LocalResult::Single(ts) => ts,
        // 고정 상수 입력이라 도달 불가
        // Unreachable for this fixed constant input
        _ => Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_value_is_32_lowercase_hex_chars() {
        let value = generate_token_value();
        assert_eq!(value.len(), TOKEN_VALUE_LEN);
        assert!(value.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn token_values_are_unique() {
        // 128 bits of entropy: any collision here indicates a broken generator
        let a = generate_token_value();
        let b = generate_token_value();
        assert_ne!(a, b);
    }

    #[test]
    fn new_sync_token_uses_far_future_expiration() {
        let token = AuthToken::new_sync_token(42);
        assert_eq!(token.user_id, 42);
        assert_eq!(token.token_type, TokenType::KoboSync);
        assert_eq!(token.expiration, sync_token_expiration());
        assert!(token.expiration > Utc::now());
    }

    #[test]
    fn token_type_roundtrips_through_i16() {
        assert_eq!(TokenType::from_i16(1), Some(TokenType::KoboSync));
        assert_eq!(TokenType::from_i16(99), None);
        assert_eq!(TokenType::KoboSync as i16, 1);
    }
}
