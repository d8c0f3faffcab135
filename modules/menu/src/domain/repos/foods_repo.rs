use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::model::Food;

#[async_trait]
pub trait FoodsRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Food, DomainError>;

    /// Deletes foods with their additions and pulls them out of every menu.
    async fn delete(&self, ids: &[String]) -> Result<(), DomainError>;
}
