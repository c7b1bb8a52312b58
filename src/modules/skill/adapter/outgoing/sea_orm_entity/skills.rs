use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub slug: String,

    pub category: String,
    pub proficiency_level: i32,
    pub years_experience: i32,

    pub name_en: String,
    #[sea_orm(nullable)]
    pub name_ar: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub keywords_en: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub keywords_ar: Option<Json>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub certifications_en: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub certifications_ar: Option<Json>,

    #[sea_orm(nullable)]
    pub icon: Option<String>,
    #[sea_orm(nullable)]
    pub color: Option<String>,

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
