//! Create `offerings` table.
//! Offerings shown in the "Our Offerings" section.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offerings::Table)
                    .if_not_exists()
                    .col(pk_auto(Offerings::Id))
                    .col(text(Offerings::Title).not_null())
                    .col(text(Offerings::Description).not_null())
                    .col(integer(Offerings::OrderIndex).not_null().default(0))
                    .col(timestamp_with_time_zone(Offerings::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Offerings::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Offerings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Offerings {
    Table,
    Id,
    Title,
    Description,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
