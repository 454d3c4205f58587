use serde::Serialize;
use utoipa::ToSchema;

// 라이브러리 동기화 응답 모델
// Library sync response model
#[derive(Debug, Serialize, ToSchema)]
pub struct LibrarySyncResponse {
    /// 동기화 대상 사용자 ID
    /// User the sync resolved to
    pub user_id: i64,

    /// 변경된 항목 목록
    /// Changed entitlement entries
    #[schema(value_type = Vec<Object>)]
    pub entitlements: Vec<serde_json::Value>,

    /// 후속 페이지 토큰 (없으면 동기화 완료)
    /// Continuation token (absent when the sync is complete)
    pub continuation_token: Option<String>,
}

// 디바이스 초기화 응답 모델
// Device initialization response model
#[derive(Debug, Serialize, ToSchema)]
pub struct InitializationResponse {
    /// 디바이스가 사용할 리소스 경로 목록
    /// Resource paths the device will use
    #[schema(value_type = Object)]
    pub resources: serde_json::Value,
}
