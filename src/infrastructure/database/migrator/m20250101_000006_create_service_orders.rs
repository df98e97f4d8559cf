//! Create service_orders table
//!
//! Housekeeping and maintenance work queue.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceOrders::RoomId).integer())
                    .col(
                        ColumnDef::new(ServiceOrders::ServiceType)
                            .string()
                            .not_null()
                            .default("cleaning"),
                    )
                    .col(
                        ColumnDef::new(ServiceOrders::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(ServiceOrders::Priority)
                            .string()
                            .not_null()
                            .default("normal"),
                    )
                    .col(ColumnDef::new(ServiceOrders::Notes).string())
                    .col(
                        ColumnDef::new(ServiceOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceOrders::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(ServiceOrders::ResolvedBy).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_orders_room")
                            .from(ServiceOrders::Table, ServiceOrders::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_orders_status")
                    .table(ServiceOrders::Table)
                    .col(ServiceOrders::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceOrders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ServiceOrders {
    Table,
    Id,
    RoomId,
    ServiceType,
    Status,
    Priority,
    Notes,
    CreatedAt,
    CompletedAt,
    ResolvedBy,
}
