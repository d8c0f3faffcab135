pub mod entity;
pub mod foods_sea_repo;
pub mod mapper;
pub mod menus_sea_repo;
pub mod migrations;

pub use foods_sea_repo::SeaOrmFoodsRepository;
pub use menus_sea_repo::SeaOrmMenusRepository;

use crate::domain::error::DomainError;

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.into())
    }
}
