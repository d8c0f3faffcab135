use async_trait::async_trait;
use canteen_db::{parse_id, parse_ids};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entity::food::{self, Entity as FoodEntity};
use super::entity::food_addition::{self, Entity as FoodAdditionEntity};
use super::foods_sea_repo::insert_food;
use super::entity::menu::{self, Entity as MenuEntity};
use super::entity::menu_food::{self, Entity as MenuFoodEntity};
use super::mapper::{to_foods, to_menus};
use crate::domain::error::DomainError;
use crate::domain::model::{Menu, SaveFoodCommand, SaveMenuCommand};
use crate::domain::repos::MenusRepository;

pub struct SeaOrmMenusRepository {
    db: DatabaseConnection,
}

impl SeaOrmMenusRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the foods and additions of the given menus.
    async fn populate(&self, menus: Vec<menu::Model>) -> Result<Vec<Menu>, DomainError> {
        let menu_ids: Vec<Uuid> = menus.iter().map(|m| m.id).collect();
        let links = MenuFoodEntity::find()
            .filter(menu_food::Column::MenuId.is_in(menu_ids))
            .order_by_asc(menu_food::Column::Position)
            .all(&self.db)
            .await?;

        let food_ids: Vec<Uuid> = links.iter().map(|l| l.food_id).collect();
        let foods = FoodEntity::find()
            .filter(food::Column::Id.is_in(food_ids.clone()))
            .all(&self.db)
            .await?;
        let additions = FoodAdditionEntity::find()
            .filter(food_addition::Column::FoodId.is_in(food_ids))
            .order_by_asc(food_addition::Column::Position)
            .all(&self.db)
            .await?;

        Ok(to_menus(menus, &links, &to_foods(foods, additions)))
    }
}

async fn next_position<C: ConnectionTrait>(conn: &C, menu: Uuid) -> Result<i32, DomainError> {
    let count = MenuFoodEntity::find()
        .filter(menu_food::Column::MenuId.eq(menu))
        .count(conn)
        .await?;
    i32::try_from(count)
        .map_err(|_| DomainError::Database(anyhow::anyhow!("menu {menu} has too many foods")))
}

#[async_trait]
impl MenusRepository for SeaOrmMenusRepository {
    async fn find_all(&self) -> Result<Vec<Menu>, DomainError> {
        let menus = MenuEntity::find()
            .order_by_asc(menu::Column::Name)
            .order_by_asc(menu::Column::Id)
            .all(&self.db)
            .await?;
        self.populate(menus).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Menu, DomainError> {
        let uuid = parse_id(id)?;
        let menu = MenuEntity::find_by_id(uuid)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::menu_not_found(id))?;
        self.populate(vec![menu])
            .await?
            .pop()
            .ok_or_else(|| DomainError::menu_not_found(id))
    }

    async fn save(&self, command: SaveMenuCommand) -> Result<Uuid, DomainError> {
        let txn = self.db.begin().await?;

        let menu = menu::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(command.name),
        }
        .insert(&txn)
        .await?;

        for (position, food) in (0_i32..).zip(command.foods) {
            let food_id = insert_food(&txn, food).await?;
            menu_food::ActiveModel {
                menu_id: Set(menu.id),
                food_id: Set(food_id),
                position: Set(position),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(menu.id)
    }

    async fn add_food(&self, menu: Uuid, food: SaveFoodCommand) -> Result<Uuid, DomainError> {
        let txn = self.db.begin().await?;
        let position = next_position(&txn, menu).await?;
        let food_id = insert_food(&txn, food).await?;
        menu_food::ActiveModel {
            menu_id: Set(menu),
            food_id: Set(food_id),
            position: Set(position),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok(food_id)
    }

    async fn change_name(&self, id: &str, name: &str) -> Result<(), DomainError> {
        let uuid = parse_id(id)?;
        let result = MenuEntity::update_many()
            .col_expr(menu::Column::Name, Expr::value(name))
            .filter(menu::Column::Id.eq(uuid))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::menu_not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
        let ids = parse_ids(ids)?;
        let txn = self.db.begin().await?;

        MenuFoodEntity::delete_many()
            .filter(menu_food::Column::MenuId.is_in(ids.clone()))
            .exec(&txn)
            .await?;
        let result = MenuEntity::delete_many()
            .filter(menu::Column::Id.is_in(ids))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        tracing::debug!(deleted = result.rows_affected, "Deleted menu rows");
        Ok(())
    }
}
