//! Menu module: the food catalog served by the canteen.
//!
//! Owns the `menus`, `foods`, `food_additions` and order tables. Reading
//! menus is public; every change is restricted to admins holding the
//! matching `P_MENU_*` permission.

pub mod module;
pub use module::MenuModule;

pub use api::rest::openapi::MenuApi;
pub use domain::permissions;
pub use infra::storage::migrations::Migrator;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod errors;
#[doc(hidden)]
pub mod infra;
