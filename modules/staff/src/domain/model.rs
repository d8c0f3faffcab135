use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Work hours of one weekday. `day` counts from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    pub day: u32,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WorkHours {
    /// A day with equal start and end is a day off.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.start != self.end
    }
}

/// A user account without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct User {
    pub person: Person,
    pub password_hash: String,
    pub admin: bool,
}

#[derive(Debug, Clone)]
pub struct Worker {
    pub id: Uuid,
    pub person: Person,
    pub default_work_hours: Vec<WorkHours>,
    pub permissions: Vec<String>,
    pub employment_date: NaiveDate,
}

impl Worker {
    /// Schedule entry for a weekday counted from Sunday.
    #[must_use]
    pub fn hours_on(&self, day_from_sunday: u32) -> Option<&WorkHours> {
        self.default_work_hours
            .iter()
            .find(|h| h.day == day_from_sunday)
    }

    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOffState {
    Unresolved,
    Approved,
    Rejected,
}

impl DayOffState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "UNRESOLVED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for DayOffState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day off state '{0}'")]
pub struct UnknownDayOffState(pub String);

impl FromStr for DayOffState {
    type Err = UnknownDayOffState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNRESOLVED" => Ok(Self::Unresolved),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(UnknownDayOffState(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOff {
    pub id: Uuid,
    pub worker: Uuid,
    pub date: NaiveDate,
    pub state: DayOffState,
    pub resolved_by: Option<Uuid>,
    pub resolved_date: Option<DateTime<Utc>>,
}

/// Day-off query. Unset fields do not restrict; `from`/`to` form `[from, to)`.
#[derive(Debug, Clone, Default)]
pub struct DayOffFilter {
    pub worker: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub states: Vec<DayOffState>,
}

#[derive(Debug, Clone)]
pub struct SaveUserCommand {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub admin: bool,
}

#[derive(Debug, Clone)]
pub struct SaveWorkerCommand {
    /// The worker's login, stored together with the worker.
    pub person: SaveUserCommand,
    pub work_hours: Vec<WorkHours>,
    pub permissions: Vec<String>,
    pub employment_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct SaveDayOffCommand {
    pub worker: Uuid,
    pub date: NaiveDate,
}

/// Input of the create-worker operation.
#[derive(Debug, Clone)]
pub struct NewWorker {
    pub first_name: String,
    pub last_name: String,
    pub work_hours: Option<Vec<WorkHours>>,
}

/// Freshly generated login of a worker; the password is shown once.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct WorkerDetails {
    pub worker: Worker,
    pub requests: Vec<DayOff>,
}
