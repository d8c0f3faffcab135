use std::sync::Arc;

use uuid::Uuid;

use super::error::DomainError;
use super::model::{Food, FoodDraft, Menu, MenuDraft, SaveMenuCommand};
use super::repos::{FoodsRepository, MenusRepository};
use super::validation::{validate_food, validate_menu, validate_menu_name};

/// Menu catalog operations behind the `/menu` routes.
pub struct Service {
    menus: Arc<dyn MenusRepository>,
    foods: Arc<dyn FoodsRepository>,
}

impl Service {
    pub fn new(menus: Arc<dyn MenusRepository>, foods: Arc<dyn FoodsRepository>) -> Self {
        Self { menus, foods }
    }

    pub async fn list_menus(&self) -> Result<Vec<Menu>, DomainError> {
        let menus = self.menus.find_all().await?;
        tracing::debug!(count = menus.len(), "Listed menus");
        Ok(menus)
    }

    pub async fn menu(&self, id: &str) -> Result<Menu, DomainError> {
        self.menus.find_by_id(id).await
    }

    /// Validates every food before anything is stored.
    pub async fn create_menu(&self, draft: MenuDraft) -> Result<Uuid, DomainError> {
        let (name, foods) =
            validate_menu(&draft).map_err(|errors| DomainError::Validation { errors })?;

        let id = self.menus.save(SaveMenuCommand { name, foods }).await?;
        tracing::info!(menu_id = %id, "Created menu");
        Ok(id)
    }

    /// Creates a food and appends it to the menu. Drafts carrying an `id`
    /// would update an existing food, which is not supported.
    pub async fn add_food(&self, menu_id: &str, draft: FoodDraft) -> Result<Food, DomainError> {
        let menu = self.menus.find_by_id(menu_id).await.map_err(|e| match e {
            DomainError::InvalidId { raw } => DomainError::menu_not_found(raw),
            other => other,
        })?;

        if let Some(food_id) = draft.id.as_deref() {
            tracing::debug!(menu_id = %menu.id, food_id, "Food update requested");
            return Err(DomainError::FoodUpdateUnsupported);
        }

        let command =
            validate_food(&draft).map_err(|errors| DomainError::Validation { errors })?;
        let food_id = self.menus.add_food(menu.id, command).await?;

        tracing::info!(menu_id = %menu.id, food_id = %food_id, "Added food to menu");
        self.foods.find_by_id(&food_id.to_string()).await
    }

    pub async fn delete_menus(&self, ids: &[String]) -> Result<(), DomainError> {
        require_ids(ids)?;
        self.menus.delete(ids).await?;
        tracing::info!(count = ids.len(), "Deleted menus");
        Ok(())
    }

    pub async fn rename_menu(&self, id: &str, name: Option<&str>) -> Result<(), DomainError> {
        let name = validate_menu_name(name).map_err(|errors| DomainError::Validation { errors })?;
        self.menus.change_name(id, &name).await?;
        tracing::info!(menu_id = id, %name, "Renamed menu");
        Ok(())
    }

    /// Removes the foods from every menu and deletes them.
    pub async fn delete_foods(&self, ids: &[String]) -> Result<(), DomainError> {
        require_ids(ids)?;
        self.foods.delete(ids).await?;
        tracing::info!(count = ids.len(), "Deleted foods");
        Ok(())
    }
}

fn require_ids(ids: &[String]) -> Result<(), DomainError> {
    if ids.is_empty() {
        return Err(DomainError::validation("ids", "At least one id is required"));
    }
    Ok(())
}
