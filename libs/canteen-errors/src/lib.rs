//! Error types shared by every canteen module.
//!
//! - RFC 9457 Problem Details (`Problem`)
//! - Static error definitions (`ErrDef`)
//! - `ApiResult`, the return type of REST handlers
//! - `JsonPayload` and `PathParams`, extractors rejecting with 400 problems
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod extract;
pub mod problem;
pub mod response;

pub use catalog::ErrDef;
pub use extract::{JsonPayload, PathParams};
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ValidationViolation};
pub use response::{ApiResult, JsonBody};

/// Trace id of the current tracing span, if any.
#[must_use]
pub fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}
