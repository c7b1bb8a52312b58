// src/modules/statistic/adapter/outgoing/statistic_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::statistic::adapter::outgoing::sea_orm_entity::statistics::{
    self, Column, Entity,
};
use crate::modules::statistic::application::domain::{StatisticRecord, StatisticType};
use crate::modules::statistic::application::ports::outgoing::statistic_query::{
    StatisticQuery, StatisticQueryError,
};

#[derive(Clone)]
pub struct StatisticQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatisticQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatisticQuery for StatisticQueryPostgres {
    async fn list_active(&self) -> Result<Vec<StatisticRecord>, StatisticQueryError> {
        let models = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }
}

fn model_to_record(model: statistics::Model) -> StatisticRecord {
    StatisticRecord {
        id: model.id,
        key: model.key,
        stat_type: StatisticType::from_db(&model.stat_type),
        value: model.value,
        label_en: model.label_en,
        label_ar: model.label_ar,
        description_en: model.description_en,
        description_ar: model.description_ar,
        prefix: model.prefix,
        suffix: model.suffix,
        icon: model.icon,
        color: model.color,
        is_active: model.is_active,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> StatisticQueryError {
    StatisticQueryError::DatabaseError(e.to_string())
}
