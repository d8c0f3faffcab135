use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{DayOff, DayOffFilter, DayOffState, SaveDayOffCommand};

#[async_trait]
pub trait DayOffsRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<DayOff, DomainError>;

    /// Matching day-offs ordered by date.
    async fn find(&self, filter: DayOffFilter) -> Result<Vec<DayOff>, DomainError>;

    /// Stores a new UNRESOLVED request.
    async fn save(&self, command: SaveDayOffCommand) -> Result<Uuid, DomainError>;

    async fn resolve(
        &self,
        id: Uuid,
        state: DayOffState,
        resolver: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError>;
}
