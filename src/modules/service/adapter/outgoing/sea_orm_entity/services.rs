use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub slug: String,

    pub icon: String,

    pub title_en: String,
    #[sea_orm(nullable)]
    pub title_ar: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description_en: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies_en: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub technologies_ar: Option<Json>,

    #[sea_orm(column_type = "JsonBinary")]
    pub features_en: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub features_ar: Option<Json>,

    #[sea_orm(nullable)]
    pub image_url: Option<String>,

    pub is_active: bool,
    pub sort_order: i32,
    pub is_deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
