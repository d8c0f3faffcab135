use canteen_db::InvalidIdError;
use canteen_errors::ValidationViolation;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("\"{raw}\" is not a valid object identifier")]
    InvalidId { raw: String },

    #[error("Worker not found: {id}")]
    WorkerNotFound { id: String },

    #[error("User not found: {id}")]
    UserNotFound { id: String },

    #[error("Day off request not found: {id}")]
    DayOffNotFound { id: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Validation failed: {}", summarize(.errors))]
    Validation { errors: Vec<ValidationViolation> },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![ValidationViolation::new(field, message)],
        }
    }

    pub fn worker_not_found(id: impl Into<String>) -> Self {
        Self::WorkerNotFound { id: id.into() }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    pub fn day_off_not_found(id: impl Into<String>) -> Self {
        Self::DayOffNotFound { id: id.into() }
    }
}

impl From<InvalidIdError> for DomainError {
    fn from(e: InvalidIdError) -> Self {
        Self::InvalidId { raw: e.raw }
    }
}

fn summarize(errors: &[ValidationViolation]) -> String {
    errors
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
