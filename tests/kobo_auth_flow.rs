// =====================================================
// 디바이스 토큰 인증 통합 테스트
// Device token authentication integration tests
// =====================================================
// 전체 흐름 검증:
// 1. 브라우저 로그인 → 세션 쿠키
// 2. 토큰 설정 페이지 → 디바이스 URL 발급
// 3. 디바이스 요청 → 경로 토큰으로 인증 + 세션 쿠키 설정
// 4. 무효화 → 즉시 거부
// =====================================================

mod common;

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use serde_json::json;

use common::*;

async fn login(app: &axum::Router) -> String {
    let response = post_json(
        app,
        "/login",
        json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("login sets a session cookie")
}

#[tokio::test]
async fn full_device_setup_flow() {
    let (app, _state) = test_app();

    // 1. 로그인 → 세션 쿠키
    let cookie = login(&app).await;

    // 2. 토큰 설정 페이지 → 디바이스 URL
    let response =
        get_with_cookie(&app, "/kobo_auth/generate_auth_token/1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    let token = token_from_setup_page(&page);
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    // 3. 디바이스 요청 (쿠키 없음) → 경로 토큰만으로 인증
    let response = get(&app, &format!("/{token}/v1/library/sync")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let device_cookie = session_cookie(&response)
        .expect("token-authenticated response carries a session cookie");
    let body = body_json(response).await;
    assert_eq!(body["user_id"], TEST_USER_ID);

    // 4. 그 세션 쿠키로 토큰 없는 엔드포인트 접근
    // The established session authorizes token-less requests
    let response = get_with_cookie(&app, "/me", &device_cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], TEST_USER_ID);
    assert_eq!(body["email"], TEST_EMAIL);
}

#[tokio::test]
async fn reissue_returns_the_same_setup_url() {
    let (app, _state) = test_app();
    let cookie = login(&app).await;

    let first = body_string(
        get_with_cookie(&app, "/kobo_auth/generate_auth_token/1", &cookie).await,
    )
    .await;
    let second = body_string(
        get_with_cookie(&app, "/kobo_auth/generate_auth_token/1", &cookie).await,
    )
    .await;

    assert_eq!(token_from_setup_page(&first), token_from_setup_page(&second));
}

#[tokio::test]
async fn unknown_token_gets_a_plain_denial_not_a_redirect() {
    let (app, _state) = test_app();

    // 형식은 유효하지만 발급된 적 없는 토큰
    // Well-formed but never issued
    let response = get(&app, "/a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6/v1/library/sync").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(LOCATION).is_none());
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn initialization_hands_the_device_its_resource_map() {
    let (app, state) = test_app();

    let token = state.auth_state.token_service.issue(1).await.unwrap();
    let response = get(&app, &format!("/{}/v1/initialization", token.token_value)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["resources"]["library_sync"],
        format!("{PUBLIC_URL}/v1/library/sync")
    );
    assert_eq!(body["resources"]["image_host"], PUBLIC_URL);
}

#[tokio::test]
async fn revoked_token_is_denied_immediately() {
    let (app, state) = test_app();

    let token = state.auth_state.token_service.issue(1).await.unwrap();
    let uri = format!("/{}/v1/library/sync", token.token_value);

    assert_eq!(get(&app, &uri).await.status(), StatusCode::OK);

    // 무효화 (브라우저 세션으로)
    // Revoke through the browser endpoint
    let cookie = login(&app).await;
    let response = get_with_cookie(&app, "/kobo_auth/deleteauthtoken/1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");

    assert_eq!(get(&app, &uri).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn revoking_without_a_token_succeeds() {
    let (app, _state) = test_app();
    let cookie = login(&app).await;

    let response = get_with_cookie(&app, "/kobo_auth/deleteauthtoken/1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn browser_endpoints_redirect_to_login_when_unauthenticated() {
    let (app, _state) = test_app();

    let response = get(&app, "/kobo_auth/generate_auth_token/1").await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn token_less_request_falls_through_to_other_mechanisms() {
    let (app, _state) = test_app();

    // 토큰도 쿠키도 없음 → 이 메커니즘으로는 신원 없음
    // No token segment and no cookie: nothing resolves an identity
    let response = get(&app, "/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 세션 쿠키만으로는 여전히 인증 가능
    // A session cookie alone still authenticates
    let cookie = login(&app).await;
    let response = get_with_cookie(&app, "/me", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tampered_session_cookie_is_rejected() {
    let (app, _state) = test_app();

    let response =
        get_with_cookie(&app, "/me", "library_session=eyJhbGciOiJIUzI1NiJ9.tampered.sig").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tokens_resolve_to_their_own_user_only() {
    let (app, state) = test_app();

    // 사용자별로 다른 토큰, 각 토큰은 소유자만 가리킴
    // Distinct users get distinct tokens; each resolves only to its owner
    let first = state.auth_state.token_service.issue(TEST_USER_ID).await.unwrap();
    let second = state
        .auth_state
        .token_service
        .issue(SECOND_USER_ID)
        .await
        .unwrap();
    assert_ne!(first.token_value, second.token_value);

    let response = get(&app, &format!("/{}/v1/library/sync", first.token_value)).await;
    assert_eq!(body_json(response).await["user_id"], TEST_USER_ID);

    let response = get(&app, &format!("/{}/v1/library/sync", second.token_value)).await;
    assert_eq!(body_json(response).await["user_id"], SECOND_USER_ID);
}
