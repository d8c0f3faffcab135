//! Permission names checked by the guarded menu routes.

pub const P_MENU_CREATE: &str = "P_MENU_CREATE";
pub const P_MENU_DELETE: &str = "P_MENU_DELETE";
pub const P_MENU_MODIFY: &str = "P_MENU_MODIFY";
pub const P_MENU_FOOD_CREATE: &str = "P_MENU_FOOD_CREATE";
pub const P_MENU_FOOD_DELETE: &str = "P_MENU_FOOD_DELETE";

pub const ALL: [&str; 5] = [
    P_MENU_CREATE,
    P_MENU_DELETE,
    P_MENU_MODIFY,
    P_MENU_FOOD_CREATE,
    P_MENU_FOOD_DELETE,
];
