use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A case study. The secondary subtitle/description pair is optional and
/// only rendered when both are present.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_studies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub main_title: String,
    #[sea_orm(column_type = "Text")]
    pub primary_subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub primary_description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub secondary_subtitle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub secondary_description: Option<String>,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
