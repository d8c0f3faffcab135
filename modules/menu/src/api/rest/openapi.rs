use utoipa::OpenApi;

use super::{dto, handlers};

/// OpenAPI document of the menu routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_menus,
        handlers::get_menu,
        handlers::create_menu,
        handlers::create_food,
        handlers::delete_menus,
        handlers::change_menu_name,
        handlers::delete_foods,
    ),
    components(schemas(
        dto::FoodAdditionDto,
        dto::FoodDto,
        dto::MenuDto,
        dto::CreateFoodAdditionRequest,
        dto::CreateFoodRequest,
        dto::CreateMenuRequest,
        dto::DeleteIdsRequest,
        dto::ChangeMenuNameRequest,
        canteen_errors::Problem,
        canteen_errors::ValidationViolation,
    )),
    tags((name = "menu", description = "Menus, foods and food additions"))
)]
pub struct MenuApi;
