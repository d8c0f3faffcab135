use sea_orm_migration::prelude::*;

mod m20240101_000001_create_menu_tables;
mod m20240101_000002_create_order_tables;

/// Menu schema; history is kept in its own `menu_migrations` table.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_menu_tables::Migration),
            Box::new(m20240101_000002_create_order_tables::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("menu_migrations").into_iden()
    }
}
