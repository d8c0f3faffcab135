//! Month calendar: who is at work on each day and which requests are pending.
//!
//! Weeks start on Monday and only contain dates of the requested month, so a
//! month spans four to six week rows. A worker is present on a date when the
//! default schedule for that weekday is a working day and no APPROVED day-off
//! exists for that exact calendar date.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use uuid::Uuid;

use super::error::DomainError;
use super::model::{DayOff, DayOffState, Person, WorkHours, Worker};

#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub weeks: Vec<Vec<CalendarDay>>,
}

#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub workers_present: Vec<PresentWorker>,
    pub requests: Vec<PendingRequest>,
}

#[derive(Debug, Clone)]
pub struct PresentWorker {
    pub worker_id: Uuid,
    pub person: Person,
    pub work_hours: WorkHours,
}

#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub day_off: DayOff,
    pub worker_id: Uuid,
    pub person: Person,
}

/// First day of the month and first day of the next one.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::validation(
            "month",
            format!("month {month} is out of range 1..=12"),
        ));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::validation("year", format!("year {year} is out of range")))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| DomainError::validation("year", format!("year {year} is out of range")))?;
    Ok((first, next))
}

/// Builds the calendar from all workers and the month's day-offs.
///
/// `day_offs` may hold any states; only APPROVED ones hide a worker and only
/// UNRESOLVED ones are listed as requests.
pub fn assemble_month(
    year: i32,
    month: u32,
    workers: &[Worker],
    day_offs: &[DayOff],
) -> Result<MonthCalendar, DomainError> {
    let (first, next) = month_bounds(year, month)?;
    let by_id: HashMap<Uuid, &Worker> = workers.iter().map(|w| (w.id, w)).collect();

    let mut weeks: Vec<Vec<CalendarDay>> = Vec::new();
    for date in first.iter_days().take_while(|d| *d < next) {
        if weeks.is_empty() || date.weekday() == Weekday::Mon {
            weeks.push(Vec::new());
        }
        let day = CalendarDay {
            date,
            workers_present: present_on(date, workers, day_offs),
            requests: pending_on(date, &by_id, day_offs),
        };
        if let Some(week) = weeks.last_mut() {
            week.push(day);
        }
    }

    Ok(MonthCalendar { weeks })
}

fn present_on(date: NaiveDate, workers: &[Worker], day_offs: &[DayOff]) -> Vec<PresentWorker> {
    let weekday = date.weekday().num_days_from_sunday();
    workers
        .iter()
        .filter_map(|w| {
            let hours = w.hours_on(weekday).filter(|h| h.is_working())?;
            let off = day_offs.iter().any(|d| {
                d.worker == w.id && d.date == date && d.state == DayOffState::Approved
            });
            (!off).then(|| PresentWorker {
                worker_id: w.id,
                person: w.person.clone(),
                work_hours: *hours,
            })
        })
        .collect()
}

fn pending_on(
    date: NaiveDate,
    workers: &HashMap<Uuid, &Worker>,
    day_offs: &[DayOff],
) -> Vec<PendingRequest> {
    day_offs
        .iter()
        .filter(|d| d.date == date && d.state == DayOffState::Unresolved)
        .filter_map(|d| {
            let Some(worker) = workers.get(&d.worker) else {
                tracing::warn!(day_off = %d.id, worker = %d.worker, "day off of unknown worker");
                return None;
            };
            Some(PendingRequest {
                day_off: d.clone(),
                worker_id: worker.id,
                person: worker.person.clone(),
            })
        })
        .collect()
}
