pub mod calendar;
pub mod credentials;
pub mod day_offs;
pub mod error;
pub mod model;
pub mod repos;
pub mod service;
pub mod work_hours;
