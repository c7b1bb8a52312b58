// src/modules/statistic/application/ports/outgoing/statistic_query.rs

use async_trait::async_trait;

use crate::modules::statistic::application::domain::StatisticRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatisticQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatisticQuery: Send + Sync {
    /// Active rows, `sort_order ASC, id ASC`.
    async fn list_active(&self) -> Result<Vec<StatisticRecord>, StatisticQueryError>;
}
