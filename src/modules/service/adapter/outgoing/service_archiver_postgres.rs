// src/modules/service/adapter/outgoing/service_archiver_postgres.rs

use async_trait::async_trait;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::service::adapter::outgoing::sea_orm_entity::services::{Column, Entity};
use crate::modules::service::application::ports::outgoing::service_archiver::{
    ServiceArchiver, ServiceArchiverError,
};

#[derive(Clone)]
pub struct ServiceArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn set_deleted(&self, id: i32, deleted: bool) -> Result<(), ServiceArchiverError> {
        let res = Entity::update_many()
            .col_expr(Column::IsDeleted, Expr::value(deleted))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(!deleted)) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ServiceArchiverError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ServiceArchiver for ServiceArchiverPostgres {
    async fn soft_delete(&self, id: i32) -> Result<(), ServiceArchiverError> {
        self.set_deleted(id, true).await
    }

    async fn restore(&self, id: i32) -> Result<(), ServiceArchiverError> {
        self.set_deleted(id, false).await
    }

    async fn hard_delete(&self, id: i32) -> Result<(), ServiceArchiverError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ServiceArchiverError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ServiceArchiverError {
    ServiceArchiverError::DatabaseError(e.to_string())
}
