use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{SaveWorkerCommand, Worker};

/// Workers are always loaded together with their person.
#[async_trait]
pub trait WorkersRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Worker, DomainError>;

    async fn find_by_person(&self, user_id: Uuid) -> Result<Option<Worker>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Worker>, DomainError>;

    /// Inserts the worker and its user in one transaction.
    async fn save(&self, command: SaveWorkerCommand) -> Result<Uuid, DomainError>;

    async fn update_permissions(&self, id: &str, permissions: Vec<String>)
    -> Result<(), DomainError>;
}
