use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum::{Json, Router};
use canteen_auth::{AuthState, TokenService};
use canteen_db::DbConfig;
use menu::MenuModule;
use sea_orm::DatabaseConnection;
use staff::StaffModule;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{Components, OpenApi as OpenApiDoc};
use utoipa::{Modify, OpenApi};

use crate::config::{AppConfig, ServerConfig};
use crate::signals::wait_for_shutdown;

const X_REQUEST_ID: &str = "x-request-id";

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        let components = openapi.components.get_or_insert_with(Components::new);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Canteen API", description = "Workers, day-offs and menus of a canteen"),
    modifiers(&BearerAuth)
)]
struct ServerApi;

/// Combined document of all modules.
pub fn api_doc() -> OpenApiDoc {
    let mut doc = ServerApi::openapi();
    doc.merge(staff::StaffApi::openapi());
    doc.merge(menu::MenuApi::openapi());
    doc
}

/// Connect and bring every module's schema up to date.
pub async fn connect_and_migrate(cfg: &DbConfig) -> Result<DatabaseConnection> {
    let db = canteen_db::connect(cfg)
        .await
        .context("database connection failed")?;
    StaffModule::migrate(&db).await?;
    MenuModule::migrate(&db).await?;
    Ok(db)
}

/// Full HTTP stack: module routes, `/openapi.json`, tracing, request ids and
/// optional CORS.
pub fn build_router(config: &AppConfig, db: &DatabaseConnection) -> Router {
    let tokens = Arc::new(TokenService::new(&config.auth));
    let auth = AuthState::new(tokens.clone());

    let staff = StaffModule::new(db, config.staff.clone(), tokens);
    let menu = MenuModule::new(db);

    let doc = api_doc();
    let mut router = Router::new()
        .merge(staff.router(auth.clone()))
        .merge(menu.router(auth, staff.permission_source()))
        .route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        );

    if let Some(cors) = build_cors_layer(&config.server) {
        router = router.layer(cors);
    }

    let x_request_id = HeaderName::from_static(X_REQUEST_ID);
    router
        .layer(TraceLayer::new_for_http().make_span_with(
            |req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            },
        ))
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

fn build_cors_layer(cfg: &ServerConfig) -> Option<CorsLayer> {
    if cfg.cors_allowed_origins.is_empty() {
        return None;
    }
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.cors_allowed_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS allows any origin");
        return Some(layer.allow_origin(Any));
    }
    let origins: Vec<HeaderValue> = cfg
        .cors_allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    Some(layer.allow_origin(origins))
}

pub async fn run(config: &AppConfig) -> Result<()> {
    tracing::info!(
        dsn = %canteen_db::redact_credentials_in_dsn(Some(&config.database.dsn)),
        "Connecting to database"
    );
    let db = connect_and_migrate(&config.database).await?;
    let router = build_router(config, &db);

    let addr = (config.server.bind_addr.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}:{}", addr.0, addr.1))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handling failed");
            }
        })
        .await
        .context("HTTP server failed")?;

    db.close().await.context("failed to close database")?;
    tracing::info!("Canteen server stopped");
    Ok(())
}
