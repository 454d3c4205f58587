//! Request identity resolution.
//!
//! Two middleware layers run in front of every route:
//!   1. `stash_auth_token` pulls the `auth_token` path segment out of the
//!      matched URL parameters and stashes it in the request extensions,
//!      so handlers never receive it as an argument.
//!   2. `resolve_identity` walks an ordered chain of [`IdentityResolver`]
//!      strategies until one produces a user, then makes that user available
//!      to extractors via [`CurrentUser`]. When the path token resolved the
//!      identity, a session cookie is appended to the response so follow-up
//!      requests without the token stay authenticated.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{RawPathParams, Request, State};
use axum::http::HeaderValue;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domains::auth::models::user::User;
use crate::domains::auth::services::{SessionService, TokenService, session_token_from_cookie_header};
use crate::shared::database::repositories::auth::UserRepository;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::CurrentUser;
use crate::shared::services::AppState;

/// 디바이스 라우트의 토큰 경로 매개변수 이름
/// Path parameter name carrying the device token
pub const AUTH_TOKEN_PARAM: &str = "auth_token";

/// 요청 확장에 저장되는 경로 토큰
/// Path token stashed in the request extensions
#[derive(Debug, Clone)]
pub struct AuthTokenSegment(pub String);

/// 매칭된 경로 매개변수에서 토큰 추출 (없으면 None, 에러 아님)
/// Pull the token out of the matched path parameters (absent is not an error)
pub fn auth_token_from_params(params: &RawPathParams) -> Option<String> {
    params
        .iter()
        .find(|(name, _)| name == &AUTH_TOKEN_PARAM)
        .map(|(_, value)| value.to_string())
}

/// 경로 토큰을 요청 확장으로 옮기는 미들웨어
/// Middleware that moves the path token into the request extensions
///
/// Routes without an `auth_token` segment pass through unchanged.
pub async fn stash_auth_token(
    params: Option<RawPathParams>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = params.as_ref().and_then(auth_token_from_params) {
        request.extensions_mut().insert(AuthTokenSegment(token));
    }
    next.run(request).await
}

/// 결정된 신원
/// A resolved identity
pub struct ResolvedIdentity {
    pub user: User,

    /// 응답에 세션 쿠키를 설정할지 여부
    /// Whether a session cookie should be set on the response
    pub establish_session: bool,
}

/// 신원 결정 전략 (체인으로 순서대로 시도됨)
/// Identity resolution strategy (tried in order along a chain)
///
/// `Ok(None)` means "this strategy does not apply"; the next strategy gets a
/// turn. Only infrastructure failures surface as errors.
/// Resolvers see only the request head; the body stays with the handler.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, parts: &Parts) -> Result<Option<ResolvedIdentity>, AuthError>;
}

/// 경로 토큰 기반 신원 결정 (디바이스 요청)
/// Path-token identity resolution (device requests)
pub struct PathTokenResolver {
    token_service: TokenService,
    users: Arc<dyn UserRepository>,
}

impl PathTokenResolver {
    pub fn new(token_service: TokenService, users: Arc<dyn UserRepository>) -> Self {
        Self { token_service, users }
    }
}

#[async_trait]
impl IdentityResolver for PathTokenResolver {
    fn name(&self) -> &'static str {
        "path_token"
    }

    async fn resolve(&self, parts: &Parts) -> Result<Option<ResolvedIdentity>, AuthError> {
        // 1. 라우팅 단계에서 저장해 둔 토큰 읽기
        // Read the token stashed during the routing phase
        let Some(AuthTokenSegment(token_value)) = parts.extensions.get::<AuthTokenSegment>()
        else {
            return Ok(None);
        };

        // 2. 저장소 조회 (token_value + token_type 일치가 인증의 전부)
        // Store lookup; a matching value and type is the entire check
        let Some(token) = self.token_service.resolve(token_value).await? else {
            tracing::info!("Received device request without a recognizable auth token");
            return Ok(None);
        };

        // 3. 소유 사용자 결정
        // Resolve the owning user
        let Some(user) = self.users.find_by_id(token.user_id).await? else {
            tracing::info!(user_id = token.user_id, "Auth token owner no longer exists");
            return Ok(None);
        };

        Ok(Some(ResolvedIdentity {
            user,
            establish_session: true,
        }))
    }
}

/// 세션 쿠키 기반 신원 결정 (fallback)
/// Session-cookie identity resolution (fallback)
pub struct SessionCookieResolver {
    session_service: SessionService,
    users: Arc<dyn UserRepository>,
}

impl SessionCookieResolver {
    pub fn new(session_service: SessionService, users: Arc<dyn UserRepository>) -> Self {
        Self { session_service, users }
    }
}

#[async_trait]
impl IdentityResolver for SessionCookieResolver {
    fn name(&self) -> &'static str {
        "session_cookie"
    }

    async fn resolve(&self, parts: &Parts) -> Result<Option<ResolvedIdentity>, AuthError> {
        let Some(header) = parts.headers.get(COOKIE).and_then(|v| v.to_str().ok()) else {
            return Ok(None);
        };
        let Some(session_token) = session_token_from_cookie_header(header) else {
            return Ok(None);
        };

        // 서명 검증 실패는 "해당 없음"으로 처리 (에러 아님)
        // A failed signature check is a miss, not an error
        let Ok(user_id) = self.session_service.verify(session_token) else {
            return Ok(None);
        };

        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(ResolvedIdentity {
            user,
            establish_session: false,
        }))
    }
}

/// 신원 결정 미들웨어 (모든 라우트에 적용)
/// Identity resolution middleware (applied to every route)
pub async fn resolve_identity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let mut session_user = None;

    for resolver in state.auth_state.resolvers.iter() {
        match resolver.resolve(&parts).await {
            Ok(Some(identity)) => {
                tracing::debug!(
                    resolver = resolver.name(),
                    user_id = identity.user.id,
                    "Resolved request identity"
                );
                if identity.establish_session {
                    session_user = Some(identity.user.id);
                }
                parts.extensions.insert(CurrentUser(identity.user));
                break;
            }
            Ok(None) => continue,
            // 인프라 장애만 에러로 전파 (인증 실패 자체는 에러가 아님)
            // Only infrastructure failures propagate as errors
            Err(err) => return err.into_response(),
        }
    }

    let mut response = next.run(Request::from_parts(parts, body)).await;

    // 토큰으로 인증된 요청에는 세션 쿠키를 실어 보냄
    // Token-authenticated requests get a session cookie on the response
    if let Some(user_id) = session_user {
        match state.auth_state.session_service.session_cookie(user_id) {
            Ok(cookie) => {
                if let Ok(value) = HeaderValue::from_str(&cookie) {
                    response.headers_mut().append(SET_COOKIE, value);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to issue session cookie");
            }
        }
    }

    response
}
