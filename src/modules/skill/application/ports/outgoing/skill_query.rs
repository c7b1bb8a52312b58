// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;

use crate::modules::skill::application::domain::SkillRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of `skills`. Every listing is ordered
/// `sort_order ASC, proficiency_level DESC, id ASC`.
#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_active(&self) -> Result<Vec<SkillRecord>, SkillQueryError>;

    /// Active skills linked to any of `project_ids`, each skill once.
    async fn list_active_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<SkillRecord>, SkillQueryError>;

    /// The subset of `ids` that exist.
    async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, SkillQueryError>;

    async fn count_active(&self) -> Result<u64, SkillQueryError>;
}
