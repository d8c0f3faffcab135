//! Day-off request helpers.

use std::collections::BTreeSet;

use canteen_errors::ValidationViolation;
use chrono::{DateTime, NaiveDate};

use super::model::DayOff;

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is kept).
pub fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}

/// Parses and de-duplicates requested dates, reporting every unparsable entry.
pub fn parse_request_dates(
    raw: &[String],
) -> Result<BTreeSet<NaiveDate>, Vec<ValidationViolation>> {
    if raw.is_empty() {
        return Err(vec![ValidationViolation::new(
            "dates",
            "at least one date is required",
        )]);
    }

    let mut dates = BTreeSet::new();
    let mut errors = Vec::new();
    for value in raw {
        match parse_request_date(value) {
            Some(date) => {
                dates.insert(date);
            }
            None => errors.push(ValidationViolation::new(
                "dates",
                format!("\"{value}\" is not a valid date"),
            )),
        }
    }

    if errors.is_empty() { Ok(dates) } else { Err(errors) }
}

/// Drops dates for which the worker already has a request in any state.
#[must_use]
pub fn filter_out_existing_dates(
    requested: BTreeSet<NaiveDate>,
    existing: &[DayOff],
) -> Vec<NaiveDate> {
    let taken: BTreeSet<NaiveDate> = existing.iter().map(|d| d.date).collect();
    requested.into_iter().filter(|d| !taken.contains(d)).collect()
}
