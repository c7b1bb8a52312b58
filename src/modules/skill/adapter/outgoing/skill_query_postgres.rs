// src/modules/skill/adapter/outgoing/skill_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_skill;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::skill::application::domain::SkillRecord;
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError,
};
use crate::shared::json::list_from_json;

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_ordered() -> Select<Entity> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::ProficiencyLevel)
            .order_by_asc(Column::Id)
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_active(&self) -> Result<Vec<SkillRecord>, SkillQueryError> {
        let models = Self::active_ordered()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn list_active_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<SkillRecord>, SkillQueryError> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let linked = Query::select()
            .column(project_skill::Column::SkillId)
            .from(project_skill::Entity)
            .and_where(project_skill::Column::ProjectId.is_in(project_ids.to_vec()))
            .to_owned();

        let models = Self::active_ordered()
            .filter(Column::Id.in_subquery(linked))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, SkillQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Entity::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Id.is_in(ids.to_vec()))
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_active(&self) -> Result<u64, SkillQueryError> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn model_to_record(model: skills::Model) -> SkillRecord {
    SkillRecord {
        id: model.id,
        slug: model.slug,
        category: model.category,
        proficiency_level: model.proficiency_level,
        years_experience: model.years_experience,
        name_en: model.name_en,
        name_ar: model.name_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        keywords_en: list_from_json(model.keywords_en.as_ref()),
        keywords_ar: model.keywords_ar.as_ref().map(|v| list_from_json(Some(v))),
        certifications_en: list_from_json(model.certifications_en.as_ref()),
        certifications_ar: model
            .certifications_ar
            .as_ref()
            .map(|v| list_from_json(Some(v))),
        icon: model.icon,
        color: model.color,
        is_active: model.is_active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
pub(crate) fn sample_model(id: i32, category: &str) -> skills::Model {
    let now = chrono::Utc::now().fixed_offset();

    skills::Model {
        id,
        slug: format!("skill-{id}"),
        category: category.to_string(),
        proficiency_level: 75,
        years_experience: 2,
        name_en: format!("Skill {id}"),
        name_ar: None,
        description_en: None,
        description_ar: None,
        keywords_en: Some(serde_json::json!(["async", "tokio"])),
        keywords_ar: None,
        certifications_en: None,
        certifications_ar: None,
        icon: None,
        color: Some("#f74c00".to_string()),
        is_active: true,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}
