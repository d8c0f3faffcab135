//! Identifiers travel as strings; anything that is not a UUID is rejected here
//! before a query is built.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{raw}\" is not a valid object identifier")]
pub struct InvalidIdError {
    pub raw: String,
}

pub fn parse_id(raw: &str) -> Result<Uuid, InvalidIdError> {
    Uuid::parse_str(raw.trim()).map_err(|_| InvalidIdError {
        raw: raw.to_owned(),
    })
}

/// Parse every id; the first bad one is reported.
pub fn parse_ids<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Uuid>, InvalidIdError> {
    raw.iter().map(|s| parse_id(s.as_ref())).collect()
}
