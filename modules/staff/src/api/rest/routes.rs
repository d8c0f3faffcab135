use std::sync::Arc;

use axum::{
    Extension, Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post},
};
use canteen_auth::AuthState;
use canteen_auth::axum_ext::{require_admin, require_auth};

use crate::domain::service::Service;

use super::handlers;

/// `/user/login` is public, `POST /worker/dayoff` needs any valid token and
/// every other `/worker` route is admin only.
pub fn router(service: Arc<Service>, auth: AuthState) -> Router {
    let public = Router::new().route("/user/login", post(handlers::login));

    let authenticated = Router::new()
        .route("/worker/dayoff", post(handlers::create_day_off_request))
        .route_layer(from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route(
            "/worker",
            get(handlers::list_workers).post(handlers::create_worker),
        )
        .route("/worker/month/{year}/{month}", get(handlers::get_month))
        .route("/worker/dayoff", patch(handlers::change_day_off_state))
        .route("/worker/{worker_id}", get(handlers::get_worker_details))
        .route(
            "/worker/{worker_id}/permissions",
            get(handlers::get_permissions).put(handlers::update_permissions),
        )
        .route(
            "/worker/{worker_id}/password/reset",
            post(handlers::reset_password),
        )
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(auth, require_auth));

    public
        .merge(authenticated)
        .merge(admin)
        .layer(Extension(service))
}
