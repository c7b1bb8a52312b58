use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub key: String,

    #[sea_orm(column_name = "type")]
    pub content_type: String,

    #[sea_orm(nullable)]
    pub category: Option<String>,

    #[sea_orm(nullable)]
    pub title_en: Option<String>,
    #[sea_orm(nullable)]
    pub title_ar: Option<String>,

    #[sea_orm(nullable)]
    pub subtitle_en: Option<String>,
    #[sea_orm(nullable)]
    pub subtitle_ar: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub content_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_ar: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata_en: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata_ar: Option<Json>,

    pub is_active: bool,
    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
