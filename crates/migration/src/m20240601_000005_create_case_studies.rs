//! Create `case_studies` table.
//! Case studies; the secondary block is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudies::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseStudies::Id))
                    .col(text(CaseStudies::MainTitle).not_null())
                    .col(text(CaseStudies::PrimarySubtitle).not_null())
                    .col(text(CaseStudies::PrimaryDescription).not_null())
                    .col(text_null(CaseStudies::SecondarySubtitle))
                    .col(text_null(CaseStudies::SecondaryDescription))
                    .col(integer(CaseStudies::OrderIndex).not_null().default(0))
                    .col(timestamp_with_time_zone(CaseStudies::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(CaseStudies::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseStudies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseStudies {
    Table,
    Id,
    MainTitle,
    PrimarySubtitle,
    PrimaryDescription,
    SecondarySubtitle,
    SecondaryDescription,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
