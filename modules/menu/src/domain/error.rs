use canteen_db::InvalidIdError;
use canteen_errors::ValidationViolation;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("\"{raw}\" is not a valid object identifier")]
    InvalidId { raw: String },

    #[error("Menu with ID: {id} was not found")]
    MenuNotFound { id: String },

    #[error("Food with ID: {id} was not found")]
    FoodNotFound { id: String },

    #[error("Updating an existing food is not supported")]
    FoodUpdateUnsupported,

    #[error("Validation failed: {}", summarize(.errors))]
    Validation { errors: Vec<ValidationViolation> },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![ValidationViolation::new(field, message)],
        }
    }

    pub fn menu_not_found(id: impl Into<String>) -> Self {
        Self::MenuNotFound { id: id.into() }
    }

    pub fn food_not_found(id: impl Into<String>) -> Self {
        Self::FoodNotFound { id: id.into() }
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
