use async_trait::async_trait;
use canteen_db::parse_id;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use super::entity::user::{self, Entity as UserEntity};
use crate::domain::error::DomainError;
use crate::domain::model::User;
use crate::domain::repos::UsersRepository;

pub struct SeaOrmUsersRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn find_by_id(&self, id: &str) -> Result<User, DomainError> {
        let uuid = parse_id(id)?;
        UserEntity::find_by_id(uuid)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(found.map(User::from))
    }

    async fn count_by_name(&self, first_name: &str, last_name: &str) -> Result<u64, DomainError> {
        Ok(UserEntity::find()
            .filter(user::Column::FirstName.eq(first_name))
            .filter(user::Column::LastName.eq(last_name))
            .count(&self.db)
            .await?)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError> {
        let result = UserEntity::update_many()
            .col_expr(user::Column::PasswordHash, Expr::value(password_hash))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id.to_string()));
        }
        Ok(())
    }
}
