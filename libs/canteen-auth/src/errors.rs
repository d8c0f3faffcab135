use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use canteen_errors::Problem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication required: missing or invalid token")]
    Unauthenticated,

    #[error("Forbidden: insufficient permissions")]
    Forbidden,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::InvalidToken(_) | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for Problem {
    fn from(e: AuthError) -> Self {
        let status = e.status();
        let (title, code) = match status {
            StatusCode::UNAUTHORIZED => ("Unauthorized", "AUTH_UNAUTHENTICATED"),
            StatusCode::FORBIDDEN => ("Forbidden", "AUTH_FORBIDDEN"),
            _ => ("Internal Server Error", "AUTH_INTERNAL"),
        };
        let detail = if let AuthError::Internal(msg) = &e {
            tracing::error!(error = %msg, "Auth internal error");
            "An internal error occurred".to_owned()
        } else {
            e.to_string()
        };
        Problem::new(status, title, detail).with_code(code)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        Problem::from(self).into_response()
    }
}
