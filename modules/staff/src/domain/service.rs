use std::sync::Arc;

use canteen_auth::{SecurityContext, TokenService, password};
use canteen_errors::ValidationViolation;
use chrono::Utc;
use uuid::Uuid;

use super::calendar::{self, MonthCalendar};
use super::credentials::build_email;
use super::day_offs::{filter_out_existing_dates, parse_request_dates};
use super::error::DomainError;
use super::model::{
    Credentials, DayOffFilter, DayOffState, NewWorker, SaveDayOffCommand, SaveUserCommand,
    SaveWorkerCommand, Worker, WorkerDetails,
};
use super::repos::{DayOffsRepository, UsersRepository, WorkersRepository};
use super::work_hours::{default_work_hours, validate_work_hours};
use crate::config::StaffConfig;

pub struct Service {
    users: Arc<dyn UsersRepository>,
    workers: Arc<dyn WorkersRepository>,
    day_offs: Arc<dyn DayOffsRepository>,
    tokens: Arc<TokenService>,
    config: StaffConfig,
}

impl Service {
    pub fn new(
        users: Arc<dyn UsersRepository>,
        workers: Arc<dyn WorkersRepository>,
        day_offs: Arc<dyn DayOffsRepository>,
        tokens: Arc<TokenService>,
        config: StaffConfig,
    ) -> Self {
        Self {
            users,
            workers,
            day_offs,
            tokens,
            config,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            tracing::debug!("login for unknown email");
            return Err(DomainError::InvalidCredentials);
        };
        if !password::verify_password(password, &user.password_hash) {
            tracing::debug!(user_id = %user.person.id, "login with wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.person.id, &user.person.email, user.admin)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tracing::info!(user_id = %user.person.id, "User logged in");
        Ok(token)
    }

    pub async fn list_workers(&self) -> Result<Vec<Worker>, DomainError> {
        tracing::debug!("Listing workers");
        self.workers.find_all().await
    }

    pub async fn create_worker(&self, new: NewWorker) -> Result<Credentials, DomainError> {
        let first_name = new.first_name.trim().to_owned();
        let last_name = new.last_name.trim().to_owned();
        let work_hours = new.work_hours.unwrap_or_else(default_work_hours);

        let mut errors = Vec::new();
        if first_name.is_empty() {
            errors.push(ValidationViolation::new(
                "firstName",
                "First name is required",
            ));
        }
        if last_name.is_empty() {
            errors.push(ValidationViolation::new(
                "lastName",
                "Last name is required",
            ));
        }
        errors.extend(validate_work_hours(&work_hours));
        if !errors.is_empty() {
            return Err(DomainError::Validation { errors });
        }

        let email = self.free_email(&first_name, &last_name).await?;
        let password = password::generate_password(self.config.password_length);
        let password_hash = hash(&password)?;

        let worker_id = self
            .workers
            .save(SaveWorkerCommand {
                person: SaveUserCommand {
                    email: email.clone(),
                    first_name,
                    last_name,
                    password_hash,
                    admin: false,
                },
                work_hours,
                permissions: Vec::new(),
                employment_date: Utc::now().date_naive(),
            })
            .await?;

        tracing::info!(%worker_id, %email, "Created worker");
        Ok(Credentials { email, password })
    }

    /// First `first.last{N}` login nobody holds yet. The counter starts at
    /// the number of exact namesakes; names differing only in case or
    /// spacing share a login, so it moves up past emails already taken.
    async fn free_email(&self, first_name: &str, last_name: &str) -> Result<String, DomainError> {
        let mut counter = self.users.count_by_name(first_name, last_name).await?;
        loop {
            let email = build_email(first_name, last_name, counter, &self.config.email_domain);
            if self.users.find_by_email(&email).await?.is_none() {
                return Ok(email);
            }
            tracing::debug!(%email, "Login already taken");
            counter += 1;
        }
    }

    pub async fn worker_details(&self, id: &str) -> Result<WorkerDetails, DomainError> {
        tracing::debug!(worker_id = %id, "Getting worker details");
        let worker = self.workers.find_by_id(id).await?;
        let requests = self
            .day_offs
            .find(DayOffFilter {
                worker: Some(worker.id),
                ..DayOffFilter::default()
            })
            .await?;
        Ok(WorkerDetails { worker, requests })
    }

    pub async fn permissions(&self, id: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.workers.find_by_id(id).await?.permissions)
    }

    pub async fn update_permissions(
        &self,
        id: &str,
        permissions: Vec<String>,
    ) -> Result<(), DomainError> {
        self.workers
            .update_permissions(id, permissions.clone())
            .await?;
        tracing::info!(worker_id = %id, ?permissions, "Updated worker permissions");
        Ok(())
    }

    pub async fn reset_password(&self, id: &str) -> Result<Credentials, DomainError> {
        let worker = self.workers.find_by_id(id).await?;
        let password = password::generate_password(self.config.password_length);
        self.users
            .update_password(worker.person.id, &hash(&password)?)
            .await?;

        tracing::info!(worker_id = %worker.id, "Reset worker password");
        Ok(Credentials {
            email: worker.person.email,
            password,
        })
    }

    pub async fn month(&self, year: i32, month: u32) -> Result<MonthCalendar, DomainError> {
        let (from, to) = calendar::month_bounds(year, month)?;
        let workers = self.workers.find_all().await?;
        let day_offs = self
            .day_offs
            .find(DayOffFilter {
                from: Some(from),
                to: Some(to),
                states: vec![DayOffState::Approved, DayOffState::Unresolved],
                ..DayOffFilter::default()
            })
            .await?;
        tracing::debug!(
            year,
            month,
            workers = workers.len(),
            day_offs = day_offs.len(),
            "Assembling month"
        );
        calendar::assemble_month(year, month, &workers, &day_offs)
    }

    /// Files UNRESOLVED requests for the caller; returns the ids of new records.
    pub async fn request_days_off(
        &self,
        ctx: &SecurityContext,
        dates: &[String],
    ) -> Result<Vec<Uuid>, DomainError> {
        let requested =
            parse_request_dates(dates).map_err(|errors| DomainError::Validation { errors })?;
        let worker = self.caller_worker(ctx).await?;

        let existing = self
            .day_offs
            .find(DayOffFilter {
                worker: Some(worker.id),
                ..DayOffFilter::default()
            })
            .await?;

        let mut created = Vec::new();
        for date in filter_out_existing_dates(requested, &existing) {
            let id = self
                .day_offs
                .save(SaveDayOffCommand {
                    worker: worker.id,
                    date,
                })
                .await?;
            created.push(id);
        }

        tracing::info!(worker_id = %worker.id, created = created.len(), "Requested days off");
        Ok(created)
    }

    pub async fn change_day_off_state(
        &self,
        ctx: &SecurityContext,
        id: &str,
        state: &str,
    ) -> Result<(), DomainError> {
        let state = match state.parse::<DayOffState>() {
            Ok(s @ (DayOffState::Approved | DayOffState::Rejected)) => s,
            _ => {
                return Err(DomainError::validation(
                    "state",
                    "state must be APPROVED or REJECTED",
                ));
            }
        };

        let day_off = self.day_offs.find_by_id(id).await?;
        let resolver = self.caller_worker(ctx).await?;
        self.day_offs
            .resolve(day_off.id, state, resolver.id, Utc::now())
            .await?;

        tracing::info!(
            day_off_id = %day_off.id,
            %state,
            resolved_by = %resolver.id,
            "Resolved day off"
        );
        Ok(())
    }

    async fn caller_worker(&self, ctx: &SecurityContext) -> Result<Worker, DomainError> {
        self.workers
            .find_by_person(ctx.user_id())
            .await?
            .ok_or_else(|| DomainError::worker_not_found(format!("user {}", ctx.user_id())))
    }
}

fn hash(password: &str) -> Result<String, DomainError> {
    password::hash_password(password).map_err(|e| DomainError::Internal(e.to_string()))
}
