use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::calendar::{CalendarDay, MonthCalendar, PendingRequest, PresentWorker};
use crate::domain::model::{
    Credentials, DayOff, DayOffState, Person, TimeOfDay, WorkHours, Worker, WorkerDetails,
};

/// REST DTO for a user as shown inside worker views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TimeDto {
    pub hour: u32,
    pub minute: u32,
}

/// Schedule entry with `HH:MM` times; `day` counts from Sunday (0)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursDto {
    pub day: u32,
    #[schema(example = "08:00")]
    pub start_hour: String,
    #[schema(example = "16:00")]
    pub end_hour: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerListItemDto {
    pub id: Uuid,
    pub person: PersonDto,
    pub default_work_hours: Vec<WorkHoursDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkerListResponse {
    pub workers: Vec<WorkerListItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursRequest {
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_the_week: u32,
    pub start: TimeDto,
    pub end: TimeDto,
}

/// Without `workHours` the worker gets Monday-Friday 08:00-16:00.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub work_hours: Option<Vec<WorkHoursRequest>>,
}

/// Generated login; the password is only ever returned here
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOffStateDto {
    Unresolved,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayDto {
    pub day: u32,
    pub start: TimeDto,
    pub end: TimeDto,
    pub working: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayOffDetailsDto {
    pub id: Uuid,
    pub date: NaiveDate,
    pub state: DayOffStateDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDetailsDto {
    pub person: PersonDto,
    pub employed_date: NaiveDate,
    pub work_days: Vec<WorkDayDto>,
    pub requests: Vec<DayOffDetailsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePermissionsRequest {
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWorkerDto {
    pub id: Uuid,
    pub person: PersonDto,
    pub work_hours: WorkHoursDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkerRefDto {
    pub id: Uuid,
    pub person: PersonDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DayOffRequestDto {
    pub id: Uuid,
    pub date: NaiveDate,
    pub state: DayOffStateDto,
    pub worker: WorkerRefDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayDto {
    pub workers_present: Vec<CalendarWorkerDto>,
    pub requests: Vec<DayOffRequestDto>,
}

/// One map per week, keyed by `YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthResponse {
    pub weeks: Vec<BTreeMap<String, DayDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDayOffRequest {
    /// `YYYY-MM-DD` dates
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeDayOffStateRequest {
    pub id: String,
    /// `APPROVED` or `REJECTED`
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

// Conversions

impl From<&Person> for PersonDto {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            email: p.email.clone(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
        }
    }
}

impl From<TimeOfDay> for TimeDto {
    fn from(t: TimeOfDay) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
        }
    }
}

impl From<TimeDto> for TimeOfDay {
    fn from(t: TimeDto) -> Self {
        Self::new(t.hour, t.minute)
    }
}

impl From<&WorkHours> for WorkHoursDto {
    fn from(h: &WorkHours) -> Self {
        Self {
            day: h.day,
            start_hour: h.start.to_string(),
            end_hour: h.end.to_string(),
        }
    }
}

impl From<&WorkHours> for WorkDayDto {
    fn from(h: &WorkHours) -> Self {
        Self {
            day: h.day,
            start: h.start.into(),
            end: h.end.into(),
            working: h.is_working(),
        }
    }
}

impl From<WorkHoursRequest> for WorkHours {
    fn from(r: WorkHoursRequest) -> Self {
        Self {
            day: r.day_of_the_week,
            start: r.start.into(),
            end: r.end.into(),
        }
    }
}

impl From<&Worker> for WorkerListItemDto {
    fn from(w: &Worker) -> Self {
        Self {
            id: w.id,
            person: PersonDto::from(&w.person),
            default_work_hours: w.default_work_hours.iter().map(WorkHoursDto::from).collect(),
        }
    }
}

impl From<Credentials> for CredentialsDto {
    fn from(c: Credentials) -> Self {
        Self {
            email: c.email,
            password: c.password,
        }
    }
}

impl From<DayOffState> for DayOffStateDto {
    fn from(s: DayOffState) -> Self {
        match s {
            DayOffState::Unresolved => Self::Unresolved,
            DayOffState::Approved => Self::Approved,
            DayOffState::Rejected => Self::Rejected,
        }
    }
}

impl From<&DayOff> for DayOffDetailsDto {
    fn from(d: &DayOff) -> Self {
        Self {
            id: d.id,
            date: d.date,
            state: d.state.into(),
            resolved_by: d.resolved_by,
            resolved_date: d.resolved_date,
        }
    }
}

impl From<WorkerDetails> for WorkerDetailsDto {
    fn from(d: WorkerDetails) -> Self {
        Self {
            person: PersonDto::from(&d.worker.person),
            employed_date: d.worker.employment_date,
            work_days: d.worker.default_work_hours.iter().map(WorkDayDto::from).collect(),
            requests: d.requests.iter().map(DayOffDetailsDto::from).collect(),
        }
    }
}

impl From<&PresentWorker> for CalendarWorkerDto {
    fn from(p: &PresentWorker) -> Self {
        Self {
            id: p.worker_id,
            person: PersonDto::from(&p.person),
            work_hours: WorkHoursDto::from(&p.work_hours),
        }
    }
}

impl From<&PendingRequest> for DayOffRequestDto {
    fn from(r: &PendingRequest) -> Self {
        Self {
            id: r.day_off.id,
            date: r.day_off.date,
            state: r.day_off.state.into(),
            worker: WorkerRefDto {
                id: r.worker_id,
                person: PersonDto::from(&r.person),
            },
        }
    }
}

impl From<&CalendarDay> for DayDto {
    fn from(d: &CalendarDay) -> Self {
        Self {
            workers_present: d.workers_present.iter().map(CalendarWorkerDto::from).collect(),
            requests: d.requests.iter().map(DayOffRequestDto::from).collect(),
        }
    }
}

impl From<&MonthCalendar> for MonthResponse {
    fn from(m: &MonthCalendar) -> Self {
        Self {
            weeks: m
                .weeks
                .iter()
                .map(|week| {
                    week.iter()
                        .map(|day| (day.date.format("%Y-%m-%d").to_string(), DayDto::from(day)))
                        .collect()
                })
                .collect(),
        }
    }
}
