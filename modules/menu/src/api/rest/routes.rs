use std::sync::Arc;

use axum::{
    Extension, Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{MethodRouter, delete, get, patch, post},
};
use canteen_auth::axum_ext::{require_admin, require_auth, require_permission};
use canteen_auth::{AuthState, PermissionGuard, PermissionSource};

use crate::domain::permissions::{
    P_MENU_CREATE, P_MENU_DELETE, P_MENU_FOOD_CREATE, P_MENU_FOOD_DELETE, P_MENU_MODIFY,
};
use crate::domain::service::Service;

use super::handlers;

/// Reading menus is public. Every change needs an admin token and the
/// route's permission, looked up through `permissions`.
pub fn router(
    service: Arc<Service>,
    auth: AuthState,
    permissions: Arc<dyn PermissionSource>,
) -> Router {
    let guarded = |path: &str, method: MethodRouter, permission: &'static str| {
        Router::new()
            .route(path, method)
            .route_layer(from_fn_with_state(
                PermissionGuard::new(permissions.clone(), permission),
                require_permission,
            ))
            .route_layer(from_fn(require_admin))
            .route_layer(from_fn_with_state(auth.clone(), require_auth))
    };

    Router::new()
        .route("/menu", get(handlers::list_menus))
        .route("/menu/{id}", get(handlers::get_menu))
        .route("/menu/food", get(handlers::get_menu_food_path))
        .merge(guarded("/menu", post(handlers::create_menu), P_MENU_CREATE))
        .merge(guarded("/menu", delete(handlers::delete_menus), P_MENU_DELETE))
        .merge(guarded(
            "/menu/{id}",
            patch(handlers::change_menu_name),
            P_MENU_MODIFY,
        ))
        .merge(guarded(
            "/menu/{id}/food",
            post(handlers::create_food),
            P_MENU_FOOD_CREATE,
        ))
        .merge(guarded(
            "/menu/food",
            delete(handlers::delete_foods),
            P_MENU_FOOD_DELETE,
        ))
        .layer(Extension(service))
}
