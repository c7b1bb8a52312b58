use tracing::info;

use super::project_command::ProjectCommand;
use super::project_links::{check_links, LinkCheckError};
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Invalid links: {0}")]
    InvalidLinks(ValidationErrors),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LinkCheckError> for CreateProjectError {
    fn from(e: LinkCheckError) -> Self {
        match e {
            LinkCheckError::Invalid(errors) => CreateProjectError::InvalidLinks(errors),
            LinkCheckError::RepositoryError(msg) => CreateProjectError::RepositoryError(msg),
        }
    }
}

#[async_trait::async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: ProjectCommand) -> Result<ProjectRecord, CreateProjectError>;
}

#[derive(Debug, Clone)]
pub struct CreateProjectUseCase<R, S, K>
where
    R: ProjectRepository,
    S: ServiceQuery,
    K: SkillQuery,
{
    repository: R,
    services: S,
    skills: K,
}

impl<R, S, K> CreateProjectUseCase<R, S, K>
where
    R: ProjectRepository,
    S: ServiceQuery,
    K: SkillQuery,
{
    pub fn new(repository: R, services: S, skills: K) -> Self {
        Self {
            repository,
            services,
            skills,
        }
    }
}

#[async_trait::async_trait]
impl<R, S, K> ICreateProjectUseCase for CreateProjectUseCase<R, S, K>
where
    R: ProjectRepository + Send + Sync,
    S: ServiceQuery + Send + Sync,
    K: SkillQuery + Send + Sync,
{
    async fn execute(&self, command: ProjectCommand) -> Result<ProjectRecord, CreateProjectError> {
        check_links(&self.services, &self.skills, command.links()).await?;

        let (data, links) = command.into_create_data();
        let created = self
            .repository
            .create(data, links)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                other => CreateProjectError::RepositoryError(other.to_string()),
            })?;

        info!("Project {} created ({})", created.id, created.slug);
        Ok(created)
    }
}
