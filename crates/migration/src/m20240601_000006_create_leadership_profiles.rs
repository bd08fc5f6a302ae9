//! Create `leadership_profiles` table.
//! Leadership team members.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadershipProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(LeadershipProfiles::Id))
                    .col(text(LeadershipProfiles::Name).not_null())
                    .col(text(LeadershipProfiles::Title).not_null())
                    .col(integer(LeadershipProfiles::OrderIndex).not_null().default(0))
                    .col(timestamp_with_time_zone(LeadershipProfiles::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(LeadershipProfiles::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LeadershipProfiles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LeadershipProfiles {
    Table,
    Id,
    Name,
    Title,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
