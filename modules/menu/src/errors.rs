//! Error catalog of the menu module.

use canteen_errors::ErrDef;

pub const INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Bad Request",
    code: "MENU_INVALID_ID",
    type_url: "https://errors.canteen.com/menu/invalid-id",
};

pub const VALIDATION: ErrDef = ErrDef {
    status: 400,
    title: "Bad Request",
    code: "MENU_VALIDATION",
    type_url: "https://errors.canteen.com/menu/validation",
};

pub const MENU_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "MENU_NOT_FOUND",
    type_url: "https://errors.canteen.com/menu/menu-not-found",
};

pub const FOOD_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "MENU_FOOD_NOT_FOUND",
    type_url: "https://errors.canteen.com/menu/food-not-found",
};

pub const FOOD_UPDATE_UNSUPPORTED: ErrDef = ErrDef {
    status: 501,
    title: "Not Implemented",
    code: "MENU_FOOD_UPDATE_UNSUPPORTED",
    type_url: "https://errors.canteen.com/menu/food-update-unsupported",
};

pub const INTERNAL: ErrDef = ErrDef {
    status: 500,
    title: "Internal Server Error",
    code: "MENU_INTERNAL",
    type_url: "https://errors.canteen.com/menu/internal",
};
