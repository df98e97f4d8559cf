//! Create rates table (one rate card per room type)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Rates::RoomType)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Rates::BasePrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rates::WeekendPrice).decimal_len(10, 2))
                    .col(ColumnDef::new(Rates::LowPrice).decimal_len(10, 2))
                    .col(ColumnDef::new(Rates::MidPrice).decimal_len(10, 2))
                    .col(ColumnDef::new(Rates::HighPrice).decimal_len(10, 2))
                    .col(
                        ColumnDef::new(Rates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rates {
    Table,
    Id,
    RoomType,
    BasePrice,
    WeekendPrice,
    LowPrice,
    MidPrice,
    HighPrice,
    UpdatedAt,
}
