// src/modules/content/adapter/outgoing/content_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::content::adapter::outgoing::sea_orm_entity::portfolio_content::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::entities::{ContentRecord, ContentType};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentData, ContentRepository, ContentRepositoryError,
};

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn create(&self, data: ContentData) -> Result<ContentRecord, ContentRepositoryError> {
        let model = to_active_model(data);

        let created = model.insert(&*self.db).await.map_err(map_key_error)?;

        to_record(created)
    }

    async fn update(
        &self,
        id: i32,
        data: ContentData,
    ) -> Result<ContentRecord, ContentRepositoryError> {
        let model = to_active_model(data);

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_key_error)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ContentRepositoryError::NotFound)?;

        to_record(updated)
    }

    async fn delete(
        &self,
        id: i32,
        only_type: Option<ContentType>,
    ) -> Result<(), ContentRepositoryError> {
        let mut query = Entity::delete_many().filter(Column::Id.eq(id));

        if let Some(content_type) = only_type {
            query = query.filter(Column::ContentType.eq(content_type.as_str()));
        }

        let res = query.exec(&*self.db).await.map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn to_active_model(data: ContentData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        key: Set(data.key),
        content_type: Set(data.content_type.as_str().to_string()),
        category: Set(data.category),
        title_en: Set(data.title_en),
        title_ar: Set(data.title_ar),
        subtitle_en: Set(data.subtitle_en),
        subtitle_ar: Set(data.subtitle_ar),
        description_en: Set(data.description_en),
        description_ar: Set(data.description_ar),
        content_en: Set(data.content_en),
        content_ar: Set(data.content_ar),
        metadata_en: Set(data.metadata_en),
        metadata_ar: Set(data.metadata_ar),
        is_active: Set(data.is_active),
        sort_order: Set(data.sort_order),
        created_at: NotSet,
        updated_at: NotSet,
    }
}

fn to_record(model: portfolio_content::Model) -> Result<ContentRecord, ContentRepositoryError> {
    model_to_record(model).map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

fn map_key_error(e: DbErr) -> ContentRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("key")
    {
        ContentRepositoryError::KeyAlreadyExists
    } else {
        ContentRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::mapping::sample_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn data() -> ContentData {
        ContentData {
            key: "testimonial-sara".to_string(),
            content_type: ContentType::Testimonial,
            category: None,
            title_en: Some("Sara".to_string()),
            title_ar: None,
            subtitle_en: Some("CTO".to_string()),
            subtitle_ar: None,
            description_en: None,
            description_ar: None,
            content_en: Some("Great work".to_string()),
            content_ar: None,
            metadata_en: Some(json!({"rating": 5})),
            metadata_ar: None,
            is_active: true,
            sort_order: 0,
        }
    }

    #[tokio::test]
    async fn test_create_returns_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(3, "testimonial")]])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let record = repo.create(data()).await.unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.content_type, ContentType::Testimonial);
    }

    #[tokio::test]
    async fn test_create_duplicate_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"portfolio_content_key_key\""
                    .to_string(),
            )])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(data()).await;

        assert!(matches!(
            result,
            Err(ContentRepositoryError::KeyAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<portfolio_content::Model>::new()])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(99, data()).await;

        assert!(matches!(result, Err(ContentRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(4, Some(ContentType::ContactMessage)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_wrong_type_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(4, Some(ContentType::ContactMessage)).await;

        assert!(matches!(result, Err(ContentRepositoryError::NotFound)));
    }
}
