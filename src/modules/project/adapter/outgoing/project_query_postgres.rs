// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_service, project_skill,
    projects::{self, Column, Entity},
};
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectLinks, ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult, Trashed};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<Entity> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsDeleted.eq(false))
    }

    fn newest_first(query: Select<Entity>) -> Select<Entity> {
        query
            .order_by_with_nulls(Column::CompletedAt, Order::Desc, NullOrdering::Last)
            .order_by_desc(Column::Id)
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectRecord>, ProjectQueryError> {
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

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        if let Some(featured) = filter.featured {
            query = query.filter(Column::IsFeatured.eq(featured));
        }

        if filter.active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        query = match filter.trashed {
            Trashed::Without => query.filter(Column::IsDeleted.eq(false)),
            Trashed::With => query,
            Trashed::Only => query.filter(Column::IsDeleted.eq(true)),
        };

        let query = Self::newest_first(query.order_by_asc(Column::SortOrder));

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: to_records(models)?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_latest_active(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let models = Self::newest_first(Self::active())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_records(models)
    }

    async fn list_active_for_service(
        &self,
        service_id: i32,
        limit: u64,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let query = Self::active()
            .join(JoinType::InnerJoin, projects::Relation::ProjectService.def())
            .filter(project_service::Column::ServiceId.eq(service_id));

        let models = Self::newest_first(query)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_records(models)
    }

    async fn recently_updated_active(
        &self,
        limit: u64,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let models = Self::active()
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_records(models)
    }

    async fn get_by_id(&self, id: i32) -> Result<ProjectRecord, ProjectQueryError> {
        let model = Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        to_record(model)
    }

    async fn links(&self, id: i32) -> Result<ProjectLinks, ProjectQueryError> {
        let service_ids = project_service::Entity::find()
            .select_only()
            .column(project_service::Column::ServiceId)
            .filter(project_service::Column::ProjectId.eq(id))
            .order_by_asc(project_service::Column::ServiceId)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let skill_ids = project_skill::Entity::find()
            .select_only()
            .column(project_skill::Column::SkillId)
            .filter(project_skill::Column::ProjectId.eq(id))
            .order_by_asc(project_skill::Column::SkillId)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ProjectLinks {
            service_ids,
            skill_ids,
        })
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, ProjectQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::Category.ne(""))
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_active(&self) -> Result<u64, ProjectQueryError> {
        Self::active().count(&*self.db).await.map_err(map_db_err)
    }
}

fn to_record(model: projects::Model) -> Result<ProjectRecord, ProjectQueryError> {
    model_to_record(model).map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn to_records(models: Vec<projects::Model>) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
    models.into_iter().map(to_record).collect()
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::adapter::outgoing::mapping::sample_model;
    use crate::modules::project::application::domain::ProjectCategory;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    fn int_row(column: &str, n: i32) -> BTreeMap<String, Value> {
        BTreeMap::from([(column.to_string(), Value::Int(Some(n)))])
    }

    #[tokio::test]
    async fn test_get_by_id_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(4)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let record = query.get_by_id(4).await.unwrap();

        assert_eq!(record.id, 4);
        assert_eq!(record.category, ProjectCategory::Web);
        assert_eq!(record.technologies_en, vec!["Rust", "Actix"]);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(9).await;

        assert!(matches!(result, Err(ProjectQueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_unknown_category_is_serialization_error() {
        let mut model = sample_model(1);
        model.category = "games".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.list_latest_active().await;

        assert!(matches!(
            result,
            Err(ProjectQueryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_paginates_with_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(31)]])
            .append_query_results(vec![vec![sample_model(31)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let page = query
            .list(
                ProjectListFilter {
                    search: Some("sensor".to_string()),
                    category: Some(ProjectCategory::Iot),
                    featured: Some(true),
                    active_only: true,
                    ..ProjectListFilter::default()
                },
                PageRequest::new(Some(3), None, 15),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 31);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_active_for_service_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(2), sample_model(1)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let rows = query.list_active_for_service(5, 6).await.unwrap();

        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_links_reads_both_pivots() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![int_row("service_id", 1), int_row("service_id", 3)]])
            .append_query_results(vec![vec![int_row("skill_id", 8)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let links = query.links(2).await.unwrap();

        assert_eq!(
            links,
            ProjectLinks {
                service_ids: vec![1, 3],
                skill_ids: vec![8],
            }
        );
    }

    #[tokio::test]
    async fn test_distinct_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                BTreeMap::from([("category".to_string(), Value::from("ai"))]),
                BTreeMap::from([("category".to_string(), Value::from("web"))]),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let categories = query.distinct_categories().await.unwrap();

        assert_eq!(categories, vec!["ai", "web"]);
    }

    #[tokio::test]
    async fn test_count_active() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(7)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        assert_eq!(query.count_active().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection lost".to_string())])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.recently_updated_active(5).await;

        assert!(matches!(
            result,
            Err(ProjectQueryError::DatabaseError(msg)) if msg.contains("connection lost")
        ));
    }
}
