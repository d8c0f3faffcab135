pub mod day_offs_sea_repo;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod permissions;
pub mod users_sea_repo;
pub mod workers_sea_repo;

pub use day_offs_sea_repo::SeaOrmDayOffsRepository;
pub use permissions::WorkerPermissions;
pub use users_sea_repo::SeaOrmUsersRepository;
pub use workers_sea_repo::SeaOrmWorkersRepository;

use crate::domain::error::DomainError;

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.into())
    }
}
