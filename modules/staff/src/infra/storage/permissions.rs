use std::sync::Arc;

use async_trait::async_trait;
use canteen_auth::{AuthError, PermissionSource, SecurityContext};

use crate::domain::repos::WorkersRepository;

/// Resolves route permissions from the caller's worker record. Callers that
/// are not workers hold no permissions.
pub struct WorkerPermissions {
    workers: Arc<dyn WorkersRepository>,
}

impl WorkerPermissions {
    pub fn new(workers: Arc<dyn WorkersRepository>) -> Self {
        Self { workers }
    }
}

#[async_trait]
impl PermissionSource for WorkerPermissions {
    async fn has_permission(
        &self,
        ctx: &SecurityContext,
        permission: &str,
    ) -> Result<bool, AuthError> {
        let worker = self
            .workers
            .find_by_person(ctx.user_id())
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(worker.is_some_and(|w| w.has_permission(permission)))
    }
}
