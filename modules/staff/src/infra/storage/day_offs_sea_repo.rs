use async_trait::async_trait;
use canteen_db::parse_id;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entity::day_off::{self, Entity as DayOffEntity};
use crate::domain::error::DomainError;
use crate::domain::model::{DayOff, DayOffFilter, DayOffState, SaveDayOffCommand};
use crate::domain::repos::DayOffsRepository;

pub struct SeaOrmDayOffsRepository {
    db: DatabaseConnection,
}

impl SeaOrmDayOffsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DayOffsRepository for SeaOrmDayOffsRepository {
    async fn find_by_id(&self, id: &str) -> Result<DayOff, DomainError> {
        let uuid = parse_id(id)?;
        DayOffEntity::find_by_id(uuid)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::day_off_not_found(id))?
            .try_into()
    }

    async fn find(&self, filter: DayOffFilter) -> Result<Vec<DayOff>, DomainError> {
        let mut query = DayOffEntity::find();
        if let Some(worker) = filter.worker {
            query = query.filter(day_off::Column::WorkerId.eq(worker));
        }
        if let Some(from) = filter.from {
            query = query.filter(day_off::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(day_off::Column::Date.lt(to));
        }
        if let Some(date) = filter.date {
            query = query.filter(day_off::Column::Date.eq(date));
        }
        if !filter.states.is_empty() {
            query = query.filter(
                day_off::Column::State.is_in(filter.states.iter().map(|s| s.as_str())),
            );
        }

        query
            .order_by_asc(day_off::Column::Date)
            .all(&self.db)
            .await?
            .into_iter()
            .map(DayOff::try_from)
            .collect()
    }

    async fn save(&self, command: SaveDayOffCommand) -> Result<Uuid, DomainError> {
        let model = day_off::ActiveModel {
            id: Set(Uuid::new_v4()),
            worker_id: Set(command.worker),
            date: Set(command.date),
            state: Set(DayOffState::Unresolved.as_str().to_owned()),
            resolved_by: Set(None),
            resolved_date: Set(None),
        }
        .insert(&self.db)
        .await?;
        Ok(model.id)
    }

    async fn resolve(
        &self,
        id: Uuid,
        state: DayOffState,
        resolver: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let result = DayOffEntity::update_many()
            .col_expr(day_off::Column::State, Expr::value(state.as_str()))
            .col_expr(day_off::Column::ResolvedBy, Expr::value(resolver))
            .col_expr(day_off::Column::ResolvedDate, Expr::value(at))
            .filter(day_off::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::day_off_not_found(id.to_string()));
        }
        Ok(())
    }
}
