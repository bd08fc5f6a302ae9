//! Create `insights` table.
//! Short articles for the insights section.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Insights::Table)
                    .if_not_exists()
                    .col(pk_auto(Insights::Id))
                    .col(text(Insights::Title).not_null())
                    .col(text(Insights::Description).not_null())
                    .col(integer(Insights::OrderIndex).not_null().default(0))
                    .col(timestamp_with_time_zone(Insights::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Insights::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Insights::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Insights {
    Table,
    Id,
    Title,
    Description,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
