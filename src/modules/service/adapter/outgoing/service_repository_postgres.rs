// src/modules/service/adapter/outgoing/service_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::service::adapter::outgoing::sea_orm_entity::services::{
    ActiveModel, Column, Entity,
};
use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::service_repository::{
    ServiceData, ServiceRepository, ServiceRepositoryError,
};
use crate::shared::json::list_to_json;

#[derive(Clone)]
pub struct ServiceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryPostgres {
    async fn create(&self, data: ServiceData) -> Result<ServiceRecord, ServiceRepositoryError> {
        let mut model = to_active_model(data);
        model.is_deleted = Set(false);

        let created = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_record(created))
    }

    async fn update(
        &self,
        id: i32,
        data: ServiceData,
    ) -> Result<ServiceRecord, ServiceRepositoryError> {
        let results = Entity::update_many()
            .set(to_active_model(data))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        results
            .into_iter()
            .next()
            .map(model_to_record)
            .ok_or(ServiceRepositoryError::NotFound)
    }

    async fn toggle_active(&self, id: i32) -> Result<ServiceRecord, ServiceRepositoryError> {
        let results = Entity::update_many()
            .col_expr(Column::IsActive, Expr::col(Column::IsActive).not())
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_record)
            .ok_or(ServiceRepositoryError::NotFound)
    }
}

fn to_active_model(data: ServiceData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        slug: Set(data.slug),
        icon: Set(data.icon),
        title_en: Set(data.title_en),
        title_ar: Set(data.title_ar),
        description_en: Set(data.description_en),
        description_ar: Set(data.description_ar),
        technologies_en: Set(list_to_json(&data.technologies_en)),
        technologies_ar: Set(data.technologies_ar.as_deref().map(list_to_json)),
        features_en: Set(list_to_json(&data.features_en)),
        features_ar: Set(data.features_ar.as_deref().map(list_to_json)),
        image_url: Set(data.image_url),
        is_active: Set(data.is_active),
        sort_order: Set(data.sort_order),
        is_deleted: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
}

fn map_slug_error(e: DbErr) -> ServiceRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ServiceRepositoryError::SlugAlreadyExists
    } else {
        ServiceRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ServiceRepositoryError {
    ServiceRepositoryError::DatabaseError(e.to_string())
}
