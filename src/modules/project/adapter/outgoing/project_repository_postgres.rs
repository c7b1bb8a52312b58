// src/modules/project/adapter/outgoing/project_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, NotSet, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use super::mapping::model_to_record;
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_service, project_skill,
    projects::{self, ActiveModel, Column, Entity},
};
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::project_repository::{
    LinkUpdate, ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::json::list_to_json;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Replaces each requested pivot set wholesale.
    async fn replace_links<C: ConnectionTrait>(
        conn: &C,
        project_id: i32,
        links: LinkUpdate,
    ) -> Result<(), DbErr> {
        if let Some(service_ids) = links.service_ids {
            project_service::Entity::delete_many()
                .filter(project_service::Column::ProjectId.eq(project_id))
                .exec(conn)
                .await?;

            if !service_ids.is_empty() {
                let rows = service_ids.into_iter().map(|service_id| {
                    project_service::ActiveModel {
                        project_id: Set(project_id),
                        service_id: Set(service_id),
                        created_at: NotSet,
                    }
                });
                project_service::Entity::insert_many(rows)
                    .exec_without_returning(conn)
                    .await?;
            }
        }

        if let Some(skill_ids) = links.skill_ids {
            project_skill::Entity::delete_many()
                .filter(project_skill::Column::ProjectId.eq(project_id))
                .exec(conn)
                .await?;

            if !skill_ids.is_empty() {
                let rows = skill_ids.into_iter().map(|skill_id| project_skill::ActiveModel {
                    project_id: Set(project_id),
                    skill_id: Set(skill_id),
                    created_at: NotSet,
                });
                project_skill::Entity::insert_many(rows)
                    .exec_without_returning(conn)
                    .await?;
            }
        }

        Ok(())
    }

    async fn update_returning(
        &self,
        query: sea_orm::UpdateMany<Entity>,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let results = query
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        to_record(updated)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        data: ProjectData,
        links: LinkUpdate,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = to_active_model(data);
        model.thumbnail_url = Set(None);
        model.is_deleted = Set(false);

        // An early return drops the transaction, which rolls it back.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let created = model.insert(&txn).await.map_err(map_slug_error)?;

        Self::replace_links(&txn, created.id, links)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        to_record(created)
    }

    async fn update(
        &self,
        id: i32,
        data: ProjectData,
        links: LinkUpdate,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let results = Entity::update_many()
            .set(to_active_model(data))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&txn)
            .await
            .map_err(map_slug_error)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        Self::replace_links(&txn, id, links)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        to_record(updated)
    }

    async fn toggle_active(&self, id: i32) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.update_returning(
            Entity::update_many()
                .col_expr(Column::IsActive, Expr::col(Column::IsActive).not())
                .filter(Column::Id.eq(id)),
        )
        .await
    }

    async fn toggle_featured(&self, id: i32) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.update_returning(
            Entity::update_many()
                .col_expr(Column::IsFeatured, Expr::col(Column::IsFeatured).not())
                .filter(Column::Id.eq(id)),
        )
        .await
    }

    async fn set_thumbnail(
        &self,
        id: i32,
        url: &str,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.update_returning(
            Entity::update_many()
                .col_expr(Column::ThumbnailUrl, Expr::value(url))
                .filter(Column::Id.eq(id)),
        )
        .await
    }
}

fn to_active_model(data: ProjectData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        slug: Set(data.slug),
        category: Set(data.category.as_str().to_string()),
        is_featured: Set(data.is_featured),
        is_active: Set(data.is_active),
        sort_order: Set(data.sort_order),
        completed_at: Set(data.completed_at),
        title_en: Set(data.title_en),
        title_ar: Set(data.title_ar),
        description_en: Set(data.description_en),
        description_ar: Set(data.description_ar),
        content_en: Set(data.content_en),
        content_ar: Set(data.content_ar),
        technologies_en: Set(list_to_json(&data.technologies_en)),
        technologies_ar: Set(data.technologies_ar.as_deref().map(list_to_json)),
        challenges_en: Set(data.challenges_en.as_deref().map(list_to_json)),
        challenges_ar: Set(data.challenges_ar.as_deref().map(list_to_json)),
        solutions_en: Set(data.solutions_en.as_deref().map(list_to_json)),
        solutions_ar: Set(data.solutions_ar.as_deref().map(list_to_json)),
        github_url: Set(data.github_url),
        live_url: Set(data.live_url),
        demo_url: Set(data.demo_url),
        images: Set(list_to_json(&data.images)),
        thumbnail_url: NotSet,
        tags: Set(list_to_json(&data.tags)),
        metadata: Set(data.metadata),
        is_deleted: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
}

fn to_record(model: projects::Model) -> Result<ProjectRecord, ProjectRepositoryError> {
    model_to_record(model).map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
