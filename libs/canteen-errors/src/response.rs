use axum::Json;

use crate::problem::Problem;

/// Handler result: any error renders as a problem document.
pub type ApiResult<T> = Result<T, Problem>;

/// Short alias for JSON responses
pub type JsonBody<T> = Json<T>;
