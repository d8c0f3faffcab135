use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Admin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_name")
                    .table(Users::Table)
                    .col(Users::FirstName)
                    .col(Users::LastName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Workers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Workers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Workers::PersonId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Workers::DefaultWorkHours).json().not_null())
                    .col(ColumnDef::new(Workers::Permissions).json().not_null())
                    .col(ColumnDef::new(Workers::EmploymentDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DayOffs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DayOffs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(DayOffs::WorkerId).uuid().not_null())
                    .col(ColumnDef::new(DayOffs::Date).date().not_null())
                    .col(ColumnDef::new(DayOffs::State).string_len(16).not_null())
                    .col(ColumnDef::new(DayOffs::ResolvedBy).uuid())
                    .col(ColumnDef::new(DayOffs::ResolvedDate).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_day_offs_worker_date")
                    .table(DayOffs::Table)
                    .col(DayOffs::WorkerId)
                    .col(DayOffs::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_day_offs_date_state")
                    .table(DayOffs::Table)
                    .col(DayOffs::Date)
                    .col(DayOffs::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DayOffs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    Admin,
}

#[derive(DeriveIden)]
enum Workers {
    Table,
    Id,
    PersonId,
    DefaultWorkHours,
    Permissions,
    EmploymentDate,
}

#[derive(DeriveIden)]
enum DayOffs {
    Table,
    Id,
    WorkerId,
    Date,
    State,
    ResolvedBy,
    ResolvedDate,
}
