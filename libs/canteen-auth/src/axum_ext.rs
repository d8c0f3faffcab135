//! Axum extractors and middleware for auth

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{context::SecurityContext, errors::AuthError, jwt::TokenService};

/// Extractor for [`SecurityContext`]; requires [`require_auth`] on the route.
#[derive(Debug, Clone)]
pub struct Authz(pub SecurityContext);

impl<S> FromRequestParts<S> for Authz
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .cloned()
            .map(Authz)
            .ok_or(AuthError::Internal(
                "SecurityContext not found - auth middleware not configured".to_owned(),
            ))
    }
}

#[derive(Clone)]
pub struct AuthState {
    tokens: Arc<TokenService>,
}

impl AuthState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Validates the bearer token and inserts the caller's [`SecurityContext`].
pub async fn require_auth(
    State(AuthState { tokens }): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(request.headers()) else {
        return AuthError::Unauthenticated.into_response();
    };

    let claims = match tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("rejected bearer token: {err}");
            return err.into_response();
        }
    };

    request
        .extensions_mut()
        .insert(SecurityContext::from(claims));
    next.run(request).await
}

/// Rejects callers without the admin flag. Must run after [`require_auth`].
pub async fn require_admin(request: Request, next: Next) -> Response {
    let admin = request
        .extensions()
        .get::<SecurityContext>()
        .map(SecurityContext::is_admin);
    match admin {
        None => AuthError::Unauthenticated.into_response(),
        Some(false) => AuthError::Forbidden.into_response(),
        Some(true) => next.run(request).await,
    }
}

/// Looks up the named permissions granted to a user.
#[async_trait]
pub trait PermissionSource: Send + Sync {
    async fn has_permission(&self, ctx: &SecurityContext, permission: &str)
    -> Result<bool, AuthError>;
}

#[derive(Clone)]
pub struct PermissionGuard {
    source: Arc<dyn PermissionSource>,
    permission: &'static str,
}

impl PermissionGuard {
    pub fn new(source: Arc<dyn PermissionSource>, permission: &'static str) -> Self {
        Self { source, permission }
    }
}

/// Rejects callers lacking the guard's permission. Must run after [`require_auth`].
pub async fn require_permission(
    State(PermissionGuard { source, permission }): State<PermissionGuard>,
    request: Request,
    next: Next,
) -> Response {
    let Some(ctx) = request.extensions().get::<SecurityContext>().cloned() else {
        return AuthError::Unauthenticated.into_response();
    };

    match source.has_permission(&ctx, permission).await {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            tracing::debug!(user_id = %ctx.user_id(), permission, "permission denied");
            AuthError::Forbidden.into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
