//! Create `contact_submissions` table.
//! Append-only log of contact form submissions; no updated_at.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactSubmissions::Id))
                    .col(text(ContactSubmissions::FirstName).not_null())
                    .col(text(ContactSubmissions::LastName).not_null())
                    .col(text(ContactSubmissions::Email).not_null())
                    .col(text(ContactSubmissions::Phone).not_null())
                    .col(text(ContactSubmissions::Message).not_null())
                    .col(timestamp_with_time_zone(ContactSubmissions::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactSubmissions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
    CreatedAt,
}
