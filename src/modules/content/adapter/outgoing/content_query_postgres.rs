// src/modules/content/adapter/outgoing/content_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::content::adapter::outgoing::sea_orm_entity::portfolio_content::{
    self, Column, Entity,
};
use crate::modules::content::application::domain::entities::{ContentRecord, ContentType};
use crate::modules::content::application::ports::outgoing::content_query::{
    ContentListFilter, ContentQuery, ContentQueryError, ContentSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn get_by_id(&self, id: i32) -> Result<ContentRecord, ContentQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentQueryError::NotFound)?;

        to_record(model)
    }

    async fn find_active_by_key(
        &self,
        key: &str,
    ) -> Result<Option<ContentRecord>, ContentQueryError> {
        Entity::find()
            .filter(Column::Key.eq(key))
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_record)
            .transpose()
    }

    async fn list_active_by_type(
        &self,
        content_type: ContentType,
        limit: Option<u64>,
    ) -> Result<Vec<ContentRecord>, ContentQueryError> {
        let mut query = Entity::find()
            .filter(Column::ContentType.eq(content_type.as_str()))
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        models.into_iter().map(to_record).collect()
    }

    async fn latest_active_by_type(
        &self,
        content_type: ContentType,
        limit: u64,
    ) -> Result<Vec<ContentRecord>, ContentQueryError> {
        let models = Entity::find()
            .filter(Column::ContentType.eq(content_type.as_str()))
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(to_record).collect()
    }

    async fn count_by_type(&self, content_type: ContentType) -> Result<u64, ContentQueryError> {
        Entity::find()
            .filter(Column::ContentType.eq(content_type.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list(
        &self,
        filter: ContentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ContentRecord>, ContentQueryError> {
        let mut query = Entity::find();

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::TitleEn).ilike(&pattern))
                    .add(Expr::col(Column::TitleAr).ilike(&pattern))
                    .add(Expr::col(Column::ContentEn).ilike(&pattern))
                    .add(Expr::col(Column::ContentAr).ilike(&pattern)),
            );
        }

        if let Some(content_type) = filter.content_type {
            query = query.filter(Column::ContentType.eq(content_type.as_str()));
        }

        query = match filter.sort {
            ContentSort::Display => query
                .order_by_asc(Column::SortOrder)
                .order_by_asc(Column::Id),
            ContentSort::Newest => query
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<ContentRecord>, ContentQueryError> =
            models.into_iter().map(to_record).collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

fn to_record(model: portfolio_content::Model) -> Result<ContentRecord, ContentQueryError> {
    model_to_record(model).map_err(|e| ContentQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(e.to_string())
}
