use async_trait::async_trait;
use canteen_db::parse_id;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entity::user;
use super::entity::worker::{self, Entity as WorkerEntity};
use super::mapper::{permissions_json, to_worker, work_hours_json};
use crate::domain::error::DomainError;
use crate::domain::model::{SaveWorkerCommand, Worker};
use crate::domain::repos::WorkersRepository;

pub struct SeaOrmWorkersRepository {
    db: DatabaseConnection,
}

impl SeaOrmWorkersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn with_person(row: (worker::Model, Option<user::Model>)) -> Result<Worker, DomainError> {
    match row {
        (w, Some(person)) => to_worker(w, &person),
        (w, None) => Err(DomainError::Database(anyhow::anyhow!(
            "worker {} references missing user {}",
            w.id,
            w.person_id
        ))),
    }
}

#[async_trait]
impl WorkersRepository for SeaOrmWorkersRepository {
    async fn find_by_id(&self, id: &str) -> Result<Worker, DomainError> {
        let uuid = parse_id(id)?;
        let row = WorkerEntity::find_by_id(uuid)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::worker_not_found(id))?;
        with_person(row)
    }

    async fn find_by_person(&self, user_id: Uuid) -> Result<Option<Worker>, DomainError> {
        WorkerEntity::find()
            .filter(worker::Column::PersonId.eq(user_id))
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
            .map(with_person)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Worker>, DomainError> {
        WorkerEntity::find()
            .find_also_related(user::Entity)
            .order_by_asc(worker::Column::EmploymentDate)
            .order_by_asc(worker::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(with_person)
            .collect()
    }

    async fn save(&self, command: SaveWorkerCommand) -> Result<Uuid, DomainError> {
        let default_work_hours = work_hours_json(&command.work_hours)?;
        let person = command.person;
        let txn = self.db.begin().await?;

        let user = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(person.email),
            first_name: Set(person.first_name),
            last_name: Set(person.last_name),
            password_hash: Set(person.password_hash),
            admin: Set(person.admin),
        }
        .insert(&txn)
        .await?;
        let model = worker::ActiveModel {
            id: Set(Uuid::new_v4()),
            person_id: Set(user.id),
            default_work_hours: Set(default_work_hours),
            permissions: Set(permissions_json(&command.permissions)),
            employment_date: Set(command.employment_date),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(model.id)
    }

    async fn update_permissions(
        &self,
        id: &str,
        permissions: Vec<String>,
    ) -> Result<(), DomainError> {
        let uuid = parse_id(id)?;
        let result = WorkerEntity::update_many()
            .col_expr(
                worker::Column::Permissions,
                Expr::value(permissions_json(&permissions)),
            )
            .filter(worker::Column::Id.eq(uuid))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::worker_not_found(id));
        }
        Ok(())
    }
}
