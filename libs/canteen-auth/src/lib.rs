//! Authentication for the canteen REST API.
//!
//! Tokens are HS256 JWTs carrying the user id, email and admin flag. Routes
//! are guarded by stacking middleware:
//!
//! 1. [`axum_ext::require_auth`] validates the bearer token and inserts a
//!    [`SecurityContext`] into the request extensions (401 otherwise)
//! 2. [`axum_ext::require_admin`] rejects non-admin callers (403)
//! 3. [`axum_ext::require_permission`] asks a [`PermissionSource`] whether
//!    the caller holds a named permission (403)

pub mod axum_ext;
pub mod claims;
pub mod context;
pub mod errors;
pub mod jwt;
pub mod password;

pub use axum_ext::{AuthState, Authz, PermissionGuard, PermissionSource};
pub use claims::Claims;
pub use context::SecurityContext;
pub use errors::AuthError;
pub use jwt::{JwtConfig, TokenService};
