use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use canteen_errors::{ApiResult, JsonBody, JsonPayload, PathParams, Problem};
use uuid::Uuid;

use crate::domain::service::Service;

use super::dto::{
    ChangeMenuNameRequest, CreateFoodRequest, CreateMenuRequest, DeleteIdsRequest, FoodDto,
    MenuDto,
};

#[utoipa::path(
    get,
    path = "/menu",
    tag = "menu",
    responses(
        (status = 200, description = "All menus with foods and additions", body = Vec<MenuDto>)
    )
)]
pub async fn list_menus(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<JsonBody<Vec<MenuDto>>> {
    let menus = svc.list_menus().await?;
    Ok(Json(menus.iter().map(MenuDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/menu/{id}",
    tag = "menu",
    params(("id" = String, Path, description = "Menu id")),
    responses(
        (status = 200, description = "One menu", body = MenuDto),
        (status = 400, description = "Invalid id", body = Problem),
        (status = 404, description = "Unknown menu", body = Problem)
    )
)]
pub async fn get_menu(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(id): PathParams<String>,
) -> ApiResult<JsonBody<MenuDto>> {
    let menu = svc.menu(&id).await?;
    Ok(Json(MenuDto::from(&menu)))
}

/// GET on the static `/menu/food` path, which otherwise only takes DELETE.
/// Treated as a lookup of the menu id `food`.
pub async fn get_menu_food_path(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<JsonBody<MenuDto>> {
    let menu = svc.menu("food").await?;
    Ok(Json(MenuDto::from(&menu)))
}

#[utoipa::path(
    post,
    path = "/menu",
    tag = "menu",
    security(("bearer" = [])),
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Id of the new menu", body = Uuid),
        (status = 400, description = "Invalid menu or food", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Not an admin or missing P_MENU_CREATE", body = Problem)
    )
)]
pub async fn create_menu(
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<CreateMenuRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = svc.create_menu(req.into()).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

#[utoipa::path(
    post,
    path = "/menu/{menuId}/food",
    tag = "menu",
    security(("bearer" = [])),
    params(("menuId" = String, Path, description = "Menu id")),
    request_body = CreateFoodRequest,
    responses(
        (status = 201, description = "Food created and added to the menu", body = FoodDto),
        (status = 400, description = "Invalid food", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Not an admin or missing P_MENU_FOOD_CREATE", body = Problem),
        (status = 404, description = "Unknown menu", body = Problem),
        (status = 501, description = "Updating a food is not supported", body = Problem)
    )
)]
pub async fn create_food(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(menu_id): PathParams<String>,
    JsonPayload(req): JsonPayload<CreateFoodRequest>,
) -> ApiResult<impl IntoResponse> {
    let food = svc.add_food(&menu_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(FoodDto::from(&food))))
}

#[utoipa::path(
    delete,
    path = "/menu",
    tag = "menu",
    security(("bearer" = [])),
    request_body = DeleteIdsRequest,
    responses(
        (status = 200, description = "Menus deleted"),
        (status = 400, description = "No ids or an invalid id", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Not an admin or missing P_MENU_DELETE", body = Problem)
    )
)]
pub async fn delete_menus(
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<DeleteIdsRequest>,
) -> ApiResult<StatusCode> {
    svc.delete_menus(&req.ids).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    patch,
    path = "/menu/{id}",
    tag = "menu",
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Menu id")),
    request_body = ChangeMenuNameRequest,
    responses(
        (status = 200, description = "Menu renamed"),
        (status = 400, description = "Invalid id or name", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Not an admin or missing P_MENU_MODIFY", body = Problem),
        (status = 404, description = "Unknown menu", body = Problem)
    )
)]
pub async fn change_menu_name(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(id): PathParams<String>,
    JsonPayload(req): JsonPayload<ChangeMenuNameRequest>,
) -> ApiResult<StatusCode> {
    svc.rename_menu(&id, req.name.as_deref()).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/menu/food",
    tag = "menu",
    security(("bearer" = [])),
    request_body = DeleteIdsRequest,
    responses(
        (status = 200, description = "Foods removed from all menus and deleted"),
        (status = 400, description = "No ids or an invalid id", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Not an admin or missing P_MENU_FOOD_DELETE", body = Problem)
    )
)]
pub async fn delete_foods(
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<DeleteIdsRequest>,
) -> ApiResult<StatusCode> {
    svc.delete_foods(&req.ids).await?;
    Ok(StatusCode::OK)
}
