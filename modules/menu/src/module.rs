use std::sync::Arc;

use axum::Router;
use canteen_auth::{AuthState, PermissionSource};
use canteen_db::DbError;
use sea_orm::DatabaseConnection;

use crate::api::rest::routes;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{SeaOrmFoodsRepository, SeaOrmMenusRepository};

/// Wires the menu repositories, service and routes over one database.
pub struct MenuModule {
    service: Arc<Service>,
}

impl MenuModule {
    pub fn new(db: &DatabaseConnection) -> Self {
        let service = Service::new(
            Arc::new(SeaOrmMenusRepository::new(db.clone())),
            Arc::new(SeaOrmFoodsRepository::new(db.clone())),
        );
        Self {
            service: Arc::new(service),
        }
    }

    /// Create or upgrade the menu and order tables.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbError> {
        canteen_db::run_migrations::<Migrator>(db, "menu").await
    }

    /// `permissions` answers the `P_MENU_*` checks of the guarded routes.
    pub fn router(&self, auth: AuthState, permissions: Arc<dyn PermissionSource>) -> Router {
        routes::router(self.service.clone(), auth, permissions)
    }
}
