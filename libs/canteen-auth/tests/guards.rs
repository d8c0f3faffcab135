#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Middleware stacking: auth, admin and permission guards.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use canteen_auth::axum_ext::{require_admin, require_auth, require_permission};
use canteen_auth::{
    AuthError, AuthState, Authz, JwtConfig, PermissionGuard, PermissionSource, SecurityContext,
    TokenService,
};
use tower::ServiceExt;
use uuid::Uuid;

struct OnlyAdminsMayCreate;

#[async_trait]
impl PermissionSource for OnlyAdminsMayCreate {
    async fn has_permission(
        &self,
        ctx: &SecurityContext,
        permission: &str,
    ) -> Result<bool, AuthError> {
        Ok(ctx.is_admin() && permission == "P_MENU_CREATE")
    }
}

fn tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(&JwtConfig {
        secret: "test-secret".to_owned(),
        token_ttl_secs: 300,
    }))
}

fn app(tokens: Arc<TokenService>) -> Router {
    let auth = AuthState::new(tokens);
    let source: Arc<dyn PermissionSource> = Arc::new(OnlyAdminsMayCreate);

    let whoami = Router::new()
        .route(
            "/whoami",
            get(|Authz(ctx): Authz| async move { ctx.email().to_owned() }),
        )
        .route_layer(from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route("/admin", get(|| async { "ok" }))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(auth.clone(), require_auth));

    let create = Router::new()
        .route("/create", get(|| async { "ok" }))
        .route_layer(from_fn_with_state(
            PermissionGuard::new(source, "P_MENU_CREATE"),
            require_permission,
        ))
        .route_layer(from_fn_with_state(auth, require_auth));

    whoami.merge(admin).merge(create)
}

async fn call(app: Router, path: &str, token: Option<&str>) -> StatusCode {
    let mut req = Request::builder().uri(path);
    if let Some(t) = token {
        req = req.header(AUTHORIZATION, format!("Bearer {t}"));
    }
    app.oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = app(tokens());
    assert_eq!(call(app.clone(), "/whoami", None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(call(app.clone(), "/admin", None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(call(app, "/create", None).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_unauthorized() {
    let app = app(tokens());
    assert_eq!(
        call(app, "/whoami", Some("abc.def.ghi")).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn non_admin_is_forbidden() {
    let tokens = tokens();
    let token = tokens.issue(Uuid::new_v4(), "cook@canteen.com", false).unwrap();
    let app = app(tokens);
    assert_eq!(call(app.clone(), "/whoami", Some(&token)).await, StatusCode::OK);
    assert_eq!(call(app.clone(), "/admin", Some(&token)).await, StatusCode::FORBIDDEN);
    assert_eq!(call(app, "/create", Some(&token)).await, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_passes_every_guard() {
    let tokens = tokens();
    let token = tokens.issue(Uuid::new_v4(), "boss@canteen.com", true).unwrap();
    let app = app(tokens);
    assert_eq!(call(app.clone(), "/admin", Some(&token)).await, StatusCode::OK);
    assert_eq!(call(app, "/create", Some(&token)).await, StatusCode::OK);
}
