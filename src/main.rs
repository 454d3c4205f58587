use anyhow::Context;
use axum::Router;
use axum::http::Method;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sync_server::domains::auth::models::*;
use sync_server::domains::sync::models::*;
use sync_server::routes::create_router;
use sync_server::shared::config::Config;
use sync_server::shared::database::Database;
use sync_server::shared::services::AppState;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        sync_server::domains::auth::handlers::session_handler::login,
        sync_server::domains::auth::handlers::session_handler::logout,
        sync_server::domains::auth::handlers::session_handler::get_me,
        sync_server::domains::auth::handlers::kobo_auth_handler::generate_auth_token,
        sync_server::domains::auth::handlers::kobo_auth_handler::delete_auth_token,
        sync_server::domains::sync::handlers::sync_handler::library_sync,
        sync_server::domains::sync::handlers::sync_handler::initialization
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        UserResponse,
        LibrarySyncResponse,
        InitializationResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Session", description = "Browser session endpoints"),
        (name = "KoboAuth", description = "Device token setup and revocation"),
        (name = "Sync", description = "Device-facing sync endpoints (token in URL path)")
    ),
    info(
        title = "Library Sync Server",
        description = "Personal library sync service with URL-token device authentication",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: 세션 쿠키 기반 인증
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Cookie(
                        utoipa::openapi::security::ApiKeyValue::new("library_session"),
                    ),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sync_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    // DB 연결 및 마이그레이션
    // Connect and run migrations
    let db = Database::new(&config.database_url).await?;
    db.initialize().await?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, config.clone());

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .allow_credentials(false);

    // Router 생성
    let app = Router::new()
        .merge(create_router(app_state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "Server running");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
