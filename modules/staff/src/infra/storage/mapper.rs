use anyhow::Context;
use sea_orm::prelude::Json;

use super::entity::{day_off, user, worker};
use crate::domain::error::DomainError;
use crate::domain::model::{DayOff, DayOffState, Person, User, WorkHours, Worker};

impl From<&user::Model> for Person {
    fn from(m: &user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email.clone(),
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
        }
    }
}

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            person: Person::from(&m),
            password_hash: m.password_hash,
            admin: m.admin,
        }
    }
}

impl TryFrom<day_off::Model> for DayOff {
    type Error = DomainError;

    fn try_from(m: day_off::Model) -> Result<Self, Self::Error> {
        let state = m
            .state
            .parse::<DayOffState>()
            .with_context(|| format!("day off {}", m.id))?;
        Ok(Self {
            id: m.id,
            worker: m.worker_id,
            date: m.date,
            state,
            resolved_by: m.resolved_by,
            resolved_date: m.resolved_date,
        })
    }
}

/// Joins a worker row with its user row.
pub fn to_worker(m: worker::Model, person: &user::Model) -> Result<Worker, DomainError> {
    let default_work_hours: Vec<WorkHours> = serde_json::from_value(m.default_work_hours)
        .with_context(|| format!("work hours of worker {}", m.id))?;
    let permissions: Vec<String> = serde_json::from_value(m.permissions)
        .with_context(|| format!("permissions of worker {}", m.id))?;
    Ok(Worker {
        id: m.id,
        person: Person::from(person),
        default_work_hours,
        permissions,
        employment_date: m.employment_date,
    })
}

pub fn work_hours_json(hours: &[WorkHours]) -> Result<Json, DomainError> {
    Ok(serde_json::to_value(hours).context("encode work hours")?)
}

pub fn permissions_json(permissions: &[String]) -> Json {
    Json::Array(
        permissions
            .iter()
            .map(|p| Json::String(p.clone()))
            .collect(),
    )
}
