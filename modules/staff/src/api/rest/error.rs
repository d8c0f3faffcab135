use canteen_errors::{Problem, current_trace_id};

use crate::domain::error::DomainError;
use crate::errors;

/// Map domain error to RFC 9457 Problem using the staff error catalog
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::InvalidId { .. } => {
            errors::INVALID_ID.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::WorkerNotFound { .. } => {
            errors::WORKER_NOT_FOUND.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::UserNotFound { .. } => {
            errors::USER_NOT_FOUND.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::DayOffNotFound { .. } => {
            errors::DAY_OFF_NOT_FOUND.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::InvalidCredentials => {
            errors::INVALID_CREDENTIALS.with_context(e.to_string(), instance, trace_id)
        }
        DomainError::Validation { errors: violations } => errors::VALIDATION
            .with_context("Input validation errors", instance, trace_id)
            .with_errors(violations.clone()),
        DomainError::Database(_) => {
            tracing::error!(error = ?e, "Database error occurred");
            errors::INTERNAL.with_context("An internal database error occurred", instance, trace_id)
        }
        DomainError::Internal(msg) => {
            tracing::error!(error = ?e, "Internal error: {}", msg);
            errors::INTERNAL.with_context("An internal error occurred", instance, trace_id)
        }
    }
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
