//! Staff module: workers, their weekly schedules, day-off requests and login.
//!
//! The module owns the `users`, `workers` and `day_offs` tables and exposes
//! the `/worker` and `/user` REST routes. [`StaffModule`] wires repositories,
//! the service and the router together.

pub mod module;
pub use module::StaffModule;

pub use api::rest::openapi::StaffApi;
pub use config::StaffConfig;
pub use infra::storage::migrations::Migrator;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod errors;
#[doc(hidden)]
pub mod infra;
