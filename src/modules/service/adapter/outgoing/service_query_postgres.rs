// src/modules/service/adapter/outgoing/service_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::service::adapter::outgoing::sea_orm_entity::services::{Column, Entity};
use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::service_query::{
    ServiceListFilter, ServiceQuery, ServiceQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult, Trashed};

#[derive(Clone)]
pub struct ServiceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<Entity> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
    }
}

#[async_trait]
impl ServiceQuery for ServiceQueryPostgres {
    async fn list_active(&self) -> Result<Vec<ServiceRecord>, ServiceQueryError> {
        let models = Self::active()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn list(
        &self,
        filter: ServiceListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ServiceRecord>, ServiceQueryError> {
        let mut query = Entity::find();

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::TitleEn).ilike(&pattern))
                    .add(Expr::col(Column::TitleAr).ilike(&pattern))
                    .add(Expr::col(Column::DescriptionEn).ilike(&pattern))
                    .add(Expr::col(Column::DescriptionAr).ilike(&pattern)),
            );
        }

        query = match filter.trashed {
            Trashed::Without => query.filter(Column::IsDeleted.eq(false)),
            Trashed::With => query,
            Trashed::Only => query.filter(Column::IsDeleted.eq(true)),
        };

        let query = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.into_iter().map(model_to_record).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<ServiceRecord, ServiceQueryError> {
        Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .ok_or(ServiceQueryError::NotFound)
    }

    async fn get_active_by_slug(&self, slug: &str) -> Result<ServiceRecord, ServiceQueryError> {
        Self::active()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .ok_or(ServiceQueryError::NotFound)
    }

    async fn related_active(
        &self,
        exclude_id: i32,
        limit: u64,
    ) -> Result<Vec<ServiceRecord>, ServiceQueryError> {
        let models = Self::active()
            .filter(Column::Id.ne(exclude_id))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, ServiceQueryError> {
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

    async fn count_active(&self) -> Result<u64, ServiceQueryError> {
        Self::active().count(&*self.db).await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ServiceQueryError {
    ServiceQueryError::DatabaseError(e.to_string())
}
