use async_trait::async_trait;
use canteen_db::{parse_id, parse_ids};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entity::food::{self, Entity as FoodEntity};
use super::entity::food_addition::{self, Entity as FoodAdditionEntity};
use super::entity::menu_food::{self, Entity as MenuFoodEntity};
use super::mapper::to_foods;
use crate::domain::error::DomainError;
use crate::domain::model::{Food, SaveFoodCommand};
use crate::domain::repos::FoodsRepository;

pub struct SeaOrmFoodsRepository {
    db: DatabaseConnection,
}

impl SeaOrmFoodsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Inserts a food and its additions on the caller's connection, so menu
/// writes can store new foods inside their own transaction.
pub(super) async fn insert_food<C: ConnectionTrait>(
    conn: &C,
    command: SaveFoodCommand,
) -> Result<Uuid, DomainError> {
    let food = food::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(command.name),
        price: Set(command.price),
        description: Set(command.description),
    }
    .insert(conn)
    .await?;

    for (position, addition) in (0_i32..).zip(command.additions) {
        food_addition::ActiveModel {
            id: Set(Uuid::new_v4()),
            food_id: Set(food.id),
            name: Set(addition.name),
            price: Set(addition.price),
            position: Set(position),
        }
        .insert(conn)
        .await?;
    }

    Ok(food.id)
}

#[async_trait]
impl FoodsRepository for SeaOrmFoodsRepository {
    async fn find_by_id(&self, id: &str) -> Result<Food, DomainError> {
        let uuid = parse_id(id)?;
        let food = FoodEntity::find_by_id(uuid)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::food_not_found(id))?;
        let additions = FoodAdditionEntity::find()
            .filter(food_addition::Column::FoodId.eq(uuid))
            .order_by_asc(food_addition::Column::Position)
            .all(&self.db)
            .await?;

        to_foods(vec![food], additions)
            .pop()
            .ok_or_else(|| DomainError::food_not_found(id))
    }

    async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
        let ids = parse_ids(ids)?;
        let txn = self.db.begin().await?;

        MenuFoodEntity::delete_many()
            .filter(menu_food::Column::FoodId.is_in(ids.clone()))
            .exec(&txn)
            .await?;
        FoodAdditionEntity::delete_many()
            .filter(food_addition::Column::FoodId.is_in(ids.clone()))
            .exec(&txn)
            .await?;
        let result = FoodEntity::delete_many()
            .filter(food::Column::Id.is_in(ids))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        tracing::debug!(deleted = result.rows_affected, "Deleted food rows");
        Ok(())
    }
}
