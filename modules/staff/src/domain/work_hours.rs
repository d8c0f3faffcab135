//! Default weekly schedule and schedule validation.

use std::collections::HashSet;

use canteen_errors::ValidationViolation;

use super::model::{TimeOfDay, WorkHours};

pub const DAYS_IN_WEEK: u32 = 7;

const DAY_START: TimeOfDay = TimeOfDay::new(8, 0);
const DAY_END: TimeOfDay = TimeOfDay::new(16, 0);

/// Monday to Friday 08:00-16:00; the weekend has equal start and end.
#[must_use]
pub fn default_work_hours() -> Vec<WorkHours> {
    (0..DAYS_IN_WEEK)
        .map(|day| {
            let weekend = day == 0 || day == 6;
            WorkHours {
                day,
                start: DAY_START,
                end: if weekend { DAY_START } else { DAY_END },
            }
        })
        .collect()
}

/// Checks a full week: one entry per weekday, valid clock times, start not after end.
pub fn validate_work_hours(hours: &[WorkHours]) -> Vec<ValidationViolation> {
    let mut errors = Vec::new();

    if hours.len() != DAYS_IN_WEEK as usize {
        errors.push(ValidationViolation::new(
            "workHours",
            format!("exactly {DAYS_IN_WEEK} entries are required"),
        ));
    }

    let mut seen = HashSet::new();
    for h in hours {
        if h.day >= DAYS_IN_WEEK {
            errors.push(ValidationViolation::new(
                "workHours.dayOfTheWeek",
                format!("day {} is out of range 0..=6", h.day),
            ));
        } else if !seen.insert(h.day) {
            errors.push(ValidationViolation::new(
                "workHours.dayOfTheWeek",
                format!("day {} is listed more than once", h.day),
            ));
        }

        if !valid_time(h.start) || !valid_time(h.end) {
            errors.push(ValidationViolation::new(
                "workHours",
                format!("day {} has an invalid time", h.day),
            ));
        } else if h.start > h.end {
            errors.push(ValidationViolation::new(
                "workHours",
                format!("day {} starts after it ends", h.day),
            ));
        }
    }

    errors
}

fn valid_time(t: TimeOfDay) -> bool {
    t.hour <= 23 && t.minute <= 59
}
