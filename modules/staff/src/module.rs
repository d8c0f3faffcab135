use std::sync::Arc;

use axum::Router;
use canteen_auth::{AuthState, PermissionSource, TokenService};
use canteen_db::DbError;
use sea_orm::DatabaseConnection;

use crate::api::rest::routes;
use crate::config::StaffConfig;
use crate::domain::repos::WorkersRepository;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{
    SeaOrmDayOffsRepository, SeaOrmUsersRepository, SeaOrmWorkersRepository, WorkerPermissions,
};

/// Wires the staff repositories, service and routes over one database.
pub struct StaffModule {
    service: Arc<Service>,
    workers: Arc<dyn WorkersRepository>,
}

impl StaffModule {
    pub fn new(db: &DatabaseConnection, config: StaffConfig, tokens: Arc<TokenService>) -> Self {
        let workers: Arc<dyn WorkersRepository> =
            Arc::new(SeaOrmWorkersRepository::new(db.clone()));
        let service = Service::new(
            Arc::new(SeaOrmUsersRepository::new(db.clone())),
            workers.clone(),
            Arc::new(SeaOrmDayOffsRepository::new(db.clone())),
            tokens,
            config,
        );
        Self {
            service: Arc::new(service),
            workers,
        }
    }

    /// Create or upgrade the staff tables.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbError> {
        canteen_db::run_migrations::<Migrator>(db, "staff").await
    }

    pub fn router(&self, auth: AuthState) -> Router {
        routes::router(self.service.clone(), auth)
    }

    /// Permission lookups for routes guarded in other modules.
    pub fn permission_source(&self) -> Arc<dyn PermissionSource> {
        Arc::new(WorkerPermissions::new(self.workers.clone()))
    }
}
