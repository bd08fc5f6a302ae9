//! Display-order indexes for list queries.
use sea_orm_migration::prelude::*;

/// `(table, index name)` pairs for the six ordered content tables.
const ORDER_INDEXES: [(&str, &str); 6] = [
    ("offerings", "idx_offerings_order_index"),
    ("solutions", "idx_solutions_order_index"),
    ("services", "idx_services_order_index"),
    ("insights", "idx_insights_order_index"),
    ("case_studies", "idx_case_studies_order_index"),
    ("leadership_profiles", "idx_leadership_profiles_order_index"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name) in ORDER_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new(table))
                        .col(Common::OrderIndex)
                        .to_owned(),
                )
                .await?;
        }

        // ContactSubmissions: newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name) in ORDER_INDEXES {
            manager
                .drop_index(Index::drop().name(name).table(Alias::new(table)).to_owned())
                .await?;
        }
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Common { OrderIndex }

#[derive(DeriveIden)]
enum ContactSubmissions { Table, CreatedAt }
