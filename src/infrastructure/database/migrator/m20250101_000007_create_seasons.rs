//! Create seasons table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seasons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seasons::Name).string().not_null())
                    .col(ColumnDef::new(Seasons::StartDate).date().not_null())
                    .col(ColumnDef::new(Seasons::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Seasons::SeasonType)
                            .string()
                            .not_null()
                            .default("mid"),
                    )
                    .col(
                        ColumnDef::new(Seasons::Multiplier)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Seasons::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seasons_dates")
                    .table(Seasons::Table)
                    .col(Seasons::StartDate)
                    .col(Seasons::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Seasons {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    SeasonType,
    Multiplier,
    Active,
}
