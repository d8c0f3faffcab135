use canteen_errors::{Problem, current_trace_id};

use crate::domain::error::DomainError;
use crate::errors;

/// Map domain error to RFC 9457 Problem using the menu error catalog
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::InvalidId { .. } => {
            errors::INVALID_ID.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::MenuNotFound { .. } => {
            errors::MENU_NOT_FOUND.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::FoodNotFound { .. } => {
            errors::FOOD_NOT_FOUND.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::FoodUpdateUnsupported => {
            errors::FOOD_UPDATE_UNSUPPORTED.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::Validation { errors: violations } => errors::VALIDATION
            .with_context("Input validation errors", instance, trace_id)
            .with_errors(violations.clone()),
        DomainError::Database(_) => {
            tracing::error!(error = ?e, "Database error occurred");
            errors::INTERNAL.with_context("An internal database error occurred", instance, trace_id)
        }
    }
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (
                DomainError::InvalidId {
                    raw: "x".to_owned(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::menu_not_found("m"), StatusCode::NOT_FOUND),
            (DomainError::food_not_found("f"), StatusCode::NOT_FOUND),
            (DomainError::FoodUpdateUnsupported, StatusCode::NOT_IMPLEMENTED),
            (
                DomainError::validation("name", "Menu name is required"),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Database(anyhow::anyhow!("locked")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_problem(&err, "/menu").status, status);
        }
    }

    #[test]
    fn not_found_names_the_menu() {
        let p = Problem::from(DomainError::menu_not_found("abc"));
        assert_eq!(p.code, "MENU_NOT_FOUND");
        assert_eq!(p.detail, "Menu with ID: abc was not found");
    }
}
