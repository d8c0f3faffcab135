pub mod error;
pub mod model;
pub mod permissions;
pub mod repos;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_test;
