use sea_orm_migration::prelude::*;

mod m20240101_000001_create_staff_tables;

/// Staff schema; history is kept in its own `staff_migrations` table.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_staff_tables::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("staff_migrations").into_iden()
    }
}
