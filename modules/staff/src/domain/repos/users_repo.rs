use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::User;

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<User, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Number of users carrying exactly this first and last name.
    async fn count_by_name(&self, first_name: &str, last_name: &str) -> Result<u64, DomainError>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError>;
}
