use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Menu, SaveFoodCommand, SaveMenuCommand};

/// Menus are always loaded with their foods and the foods' additions.
#[async_trait]
pub trait MenusRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Menu>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Menu, DomainError>;

    /// Stores the menu and its new foods in one transaction.
    async fn save(&self, command: SaveMenuCommand) -> Result<Uuid, DomainError>;

    /// Stores a new food and appends it to the end of the menu, atomically.
    async fn add_food(&self, menu: Uuid, food: SaveFoodCommand) -> Result<Uuid, DomainError>;

    async fn change_name(&self, id: &str, name: &str) -> Result<(), DomainError>;

    /// Deletes menus; their foods are kept.
    async fn delete(&self, ids: &[String]) -> Result<(), DomainError>;
}
