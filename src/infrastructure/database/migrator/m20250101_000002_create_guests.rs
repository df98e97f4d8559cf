//! Create guests table
//!
//! Guest registry keyed by identity document. The (document_type,
//! document_number) pair is unique, which is what makes check-in
//! guest upserts idempotent.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guests::DocumentType).string().not_null())
                    .col(ColumnDef::new(Guests::DocumentNumber).string().not_null())
                    .col(ColumnDef::new(Guests::Name).string().not_null())
                    .col(ColumnDef::new(Guests::Surname).string())
                    .col(ColumnDef::new(Guests::Phone).string())
                    .col(ColumnDef::new(Guests::Email).string())
                    .col(ColumnDef::new(Guests::Nationality).string())
                    .col(
                        ColumnDef::new(Guests::Frequent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Guests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Guests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guests_document")
                    .table(Guests::Table)
                    .col(Guests::DocumentType)
                    .col(Guests::DocumentNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Guests {
    Table,
    Id,
    DocumentType,
    DocumentNumber,
    Name,
    Surname,
    Phone,
    Email,
    Nationality,
    Frequent,
    CreatedAt,
    UpdatedAt,
}
