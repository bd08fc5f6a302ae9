//! Migrator registering one migration per table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_offerings;
mod m20240601_000002_create_solutions;
mod m20240601_000003_create_services;
mod m20240601_000004_create_insights;
mod m20240601_000005_create_case_studies;
mod m20240601_000006_create_leadership_profiles;
mod m20240601_000007_create_contact_submissions;
mod m20240601_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_offerings::Migration),
            Box::new(m20240601_000002_create_solutions::Migration),
            Box::new(m20240601_000003_create_services::Migration),
            Box::new(m20240601_000004_create_insights::Migration),
            Box::new(m20240601_000005_create_case_studies::Migration),
            Box::new(m20240601_000006_create_leadership_profiles::Migration),
            Box::new(m20240601_000007_create_contact_submissions::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000008_add_indexes::Migration),
        ]
    }
}
