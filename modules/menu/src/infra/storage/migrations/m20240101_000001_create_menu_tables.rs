use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Menus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Menus::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Foods::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Foods::Name).string().not_null())
                    .col(ColumnDef::new(Foods::Price).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Foods::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FoodAdditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodAdditions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodAdditions::FoodId).uuid().not_null())
                    .col(ColumnDef::new(FoodAdditions::Name).string().not_null())
                    .col(
                        ColumnDef::new(FoodAdditions::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FoodAdditions::Position).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_additions_food")
                    .table(FoodAdditions::Table)
                    .col(FoodAdditions::FoodId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenuFoods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MenuFoods::MenuId).uuid().not_null())
                    .col(ColumnDef::new(MenuFoods::FoodId).uuid().not_null())
                    .col(ColumnDef::new(MenuFoods::Position).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MenuFoods::MenuId)
                            .col(MenuFoods::FoodId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_menu_foods_food")
                    .table(MenuFoods::Table)
                    .col(MenuFoods::FoodId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuFoods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FoodAdditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Foods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Menus {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Foods {
    Table,
    Id,
    Name,
    Price,
    Description,
}

#[derive(DeriveIden)]
enum FoodAdditions {
    Table,
    Id,
    FoodId,
    Name,
    Price,
    Position,
}

#[derive(DeriveIden)]
enum MenuFoods {
    Table,
    MenuId,
    FoodId,
    Position,
}
