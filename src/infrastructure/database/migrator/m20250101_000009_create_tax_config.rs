//! Create tax_config table and seed the singleton row

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaxConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaxConfig::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TaxConfig::TaxRatePercent)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(18),
                    )
                    .col(
                        ColumnDef::new(TaxConfig::ExemptZone)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TaxConfig::ExemptionLaw).string())
                    .col(
                        ColumnDef::new(TaxConfig::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let insert = Query::insert()
            .into_table(TaxConfig::Table)
            .columns([
                TaxConfig::Id,
                TaxConfig::TaxRatePercent,
                TaxConfig::ExemptZone,
                TaxConfig::UpdatedAt,
            ])
            .values_panic([
                1.into(),
                18.into(),
                false.into(),
                chrono::Utc::now().into(),
            ])
            .to_owned();
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaxConfig::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TaxConfig {
    Table,
    Id,
    TaxRatePercent,
    ExemptZone,
    ExemptionLaw,
    UpdatedAt,
}
