//! Create stays table
//!
//! One row per occupancy, carrying the full billing block
//! (subtotal / tax / total) frozen at check-in and rewritten
//! only by check-out rebilling.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_rooms::Rooms;
use super::m20250101_000002_create_guests::Guests;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stays::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stays::GuestId).integer().not_null())
                    .col(ColumnDef::new(Stays::RoomId).integer().not_null())
                    .col(ColumnDef::new(Stays::ReservationId).integer())
                    .col(
                        ColumnDef::new(Stays::CheckinAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stays::ExpectedCheckoutDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stays::ActualCheckoutAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Stays::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Stays::GuestStatus)
                            .string()
                            .not_null()
                            .default("inside"),
                    )
                    .col(
                        ColumnDef::new(Stays::NightlyPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stays::Nights).integer().not_null())
                    .col(
                        ColumnDef::new(Stays::Subtotal)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stays::TaxRate)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stays::TaxAmount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stays::Total).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Stays::Adults)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Stays::Children)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Stays::Notes).string())
                    .col(
                        ColumnDef::new(Stays::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stays_room")
                            .from(Stays::Table, Stays::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stays_guest")
                            .from(Stays::Table, Stays::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stays_room_status")
                    .table(Stays::Table)
                    .col(Stays::RoomId)
                    .col(Stays::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stays_checkin_at")
                    .table(Stays::Table)
                    .col(Stays::CheckinAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stays::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Stays {
    Table,
    Id,
    GuestId,
    RoomId,
    ReservationId,
    CheckinAt,
    ExpectedCheckoutDate,
    ActualCheckoutAt,
    Status,
    GuestStatus,
    NightlyPrice,
    Nights,
    Subtotal,
    TaxRate,
    TaxAmount,
    Total,
    Adults,
    Children,
    Notes,
    CreatedAt,
}
