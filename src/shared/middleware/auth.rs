use axum::Json;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Redirect, Response};
use serde_json::json;

use crate::domains::auth::models::user::User;

/// 요청에서 결정된 현재 사용자 (identity 미들웨어가 삽입)
/// Current user resolved for this request (inserted by the identity middleware)
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// 라우트 그룹별 인증 실패 정책
/// Per-route-group authentication failure policy
///
/// Device clients must receive a plain denial instead of an HTML redirect, so
/// the device route family is configured with `Deny`; browser-facing routes
/// redirect to the login page. The policy is attached per route group as an
/// `Extension` layer and consulted by `AuthRejection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// 401 JSON 응답 (디바이스 API)
    /// Plain 401 JSON response (device APIs)
    Deny,

    /// 로그인 페이지로 리다이렉트 (브라우저)
    /// Redirect to the login page (browsers)
    RedirectToLogin,
}

/// 인증된 사용자 정보 (identity 체인에서 결정)
/// Authenticated user information (resolved by the identity chain)
///
/// 사용법:
/// ```ignore
/// pub async fn library_sync(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(CurrentUser(user)) = parts.extensions.get::<CurrentUser>() {
            return Ok(AuthenticatedUser {
                user_id: user.id,
                email: user.email.clone(),
            });
        }

        // 중앙 인가 게이트: 라우트 그룹의 정책에 따라 거부 형태 결정
        // Central authorization gate: the route group's policy picks the
        // rejection shape. Missing policy falls back to a plain denial.
        let policy = parts
            .extensions
            .get::<AuthPolicy>()
            .copied()
            .unwrap_or(AuthPolicy::Deny);

        Err(AuthRejection { policy })
    }
}

/// 인증 실패 거부 응답
/// Authentication failure rejection
#[derive(Debug)]
pub struct AuthRejection {
    pub policy: AuthPolicy,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self.policy {
            AuthPolicy::Deny => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            AuthPolicy::RedirectToLogin => Redirect::to("/login").into_response(),
        }
    }
}
