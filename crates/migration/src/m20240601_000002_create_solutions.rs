//! Create `solutions` table.
//! Industry solutions.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Solutions::Table)
                    .if_not_exists()
                    .col(pk_auto(Solutions::Id))
                    .col(text(Solutions::Title).not_null())
                    .col(text(Solutions::Description).not_null())
                    .col(integer(Solutions::OrderIndex).not_null().default(0))
                    .col(timestamp_with_time_zone(Solutions::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Solutions::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Solutions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Solutions {
    Table,
    Id,
    Title,
    Description,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
