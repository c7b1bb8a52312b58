// src/modules/project/adapter/outgoing/project_archiver_postgres.rs

use async_trait::async_trait;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_archiver::{
    ProjectArchiver, ProjectArchiverError,
};

#[derive(Clone)]
pub struct ProjectArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn set_deleted(&self, id: i32, deleted: bool) -> Result<(), ProjectArchiverError> {
        let res = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(deleted))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(!deleted)) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectArchiverError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectArchiver for ProjectArchiverPostgres {
    async fn soft_delete(&self, id: i32) -> Result<(), ProjectArchiverError> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: i32) -> Result<(), ProjectArchiverError> {
        self.set_deleted(id, false).await
    }

    async fn hard_delete(&self, id: i32) -> Result<(), ProjectArchiverError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectArchiverError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProjectArchiverError {
    ProjectArchiverError::DatabaseError(e.to_string())
}
