use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::service::adapter::outgoing::sea_orm_entity::services;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub slug: String,

    pub category: String,
    pub is_featured: bool,
    pub is_active: bool,
    pub sort_order: i32,

    #[sea_orm(nullable)]
    pub completed_at: Option<Date>,

    pub title_en: String,
    #[sea_orm(nullable)]
    pub title_ar: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description_en: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub content_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_ar: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies_en: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub technologies_ar: Option<Json>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub challenges_en: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub challenges_ar: Option<Json>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub solutions_en: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub solutions_ar: Option<Json>,

    #[sea_orm(nullable)]
    pub github_url: Option<String>,
    #[sea_orm(nullable)]
    pub live_url: Option<String>,
    #[sea_orm(nullable)]
    pub demo_url: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(nullable)]
    pub thumbnail_url: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub metadata: Json,

    pub is_deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_service::Entity")]
    ProjectService,

    #[sea_orm(has_many = "super::project_skill::Entity")]
    ProjectSkill,
}

// Many-to-many: projects <-> services via project_service
impl Related<services::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_service::Relation::Services.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_service::Relation::Projects.def().rev())
    }
}

// Many-to-many: projects <-> skills via project_skill
impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_skill::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_skill::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
