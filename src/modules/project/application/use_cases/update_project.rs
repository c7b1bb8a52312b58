use tracing::info;

use super::project_command::ProjectCommand;
use super::project_links::{check_links, LinkCheckError};
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Invalid links: {0}")]
    InvalidLinks(ValidationErrors),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LinkCheckError> for UpdateProjectError {
    fn from(e: LinkCheckError) -> Self {
        match e {
            LinkCheckError::Invalid(errors) => UpdateProjectError::InvalidLinks(errors),
            LinkCheckError::RepositoryError(msg) => UpdateProjectError::RepositoryError(msg),
        }
    }
}

#[async_trait::async_trait]
pub trait IUpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        command: ProjectCommand,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProjectUseCase<Q, R, S, K>
where
    Q: ProjectQuery,
    R: ProjectRepository,
    S: ServiceQuery,
    K: SkillQuery,
{
    query: Q,
    repository: R,
    services: S,
    skills: K,
}

impl<Q, R, S, K> UpdateProjectUseCase<Q, R, S, K>
where
    Q: ProjectQuery,
    R: ProjectRepository,
    S: ServiceQuery,
    K: SkillQuery,
{
    pub fn new(query: Q, repository: R, services: S, skills: K) -> Self {
        Self {
            query,
            repository,
            services,
            skills,
        }
    }
}

#[async_trait::async_trait]
impl<Q, R, S, K> IUpdateProjectUseCase for UpdateProjectUseCase<Q, R, S, K>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
    S: ServiceQuery + Send + Sync,
    K: SkillQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        command: ProjectCommand,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        let current = self.query.get_by_id(id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => UpdateProjectError::NotFound,
            other => UpdateProjectError::RepositoryError(other.to_string()),
        })?;

        check_links(&self.services, &self.skills, command.links()).await?;

        let (data, links) = command.into_update_data(&current);
        let updated = self
            .repository
            .update(id, data, links)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::SlugAlreadyExists => UpdateProjectError::SlugAlreadyExists,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })?;

        info!("Project {} updated", updated.id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::tests::project;
    use crate::modules::project::application::ports::outgoing::mocks::{
        MockProjectQueryMock, MockProjectRepositoryMock,
    };
    use crate::modules::project::application::use_cases::project_command::tests::{
        today, valid_input,
    };
    use crate::modules::project::application::use_cases::project_command::ProjectInput;
    use crate::modules::service::application::ports::outgoing::mocks::MockServiceQueryMock;
    use crate::modules::skill::application::ports::outgoing::mocks::MockSkillQueryMock;

    fn current(id: i32) -> ProjectRecord {
        let mut record = project(id);
        record.title_en = "My Cool App".to_string();
        record.slug = "my-cool-app".to_string();
        record
    }

    #[tokio::test]
    async fn replaces_skill_set() {
        let mut query = MockProjectQueryMock::new();
        query.expect_get_by_id().returning(|id| Ok(current(id)));
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_update()
            .withf(|id, data, links| {
                *id == 4
                    && data.slug == "my-cool-app"
                    && links.skill_ids == Some(vec![2, 3])
                    && links.service_ids == Some(vec![])
            })
            .returning(|id, _, _| Ok(current(id)));
        let mut skills = MockSkillQueryMock::new();
        skills.expect_existing_ids().returning(|ids| Ok(ids.to_vec()));

        let input = ProjectInput {
            skill_ids: Some(vec![3, 2]),
            ..valid_input()
        };
        let command = ProjectCommand::new(input, today()).unwrap();

        UpdateProjectUseCase::new(query, repo, MockServiceQueryMock::new(), skills)
            .execute(4, command)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn omitted_skill_ids_clear_existing_links() {
        let mut query = MockProjectQueryMock::new();
        query.expect_get_by_id().returning(|id| Ok(current(id)));
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_update()
            .withf(|_, _, links| {
                links.skill_ids == Some(vec![]) && links.service_ids == Some(vec![])
            })
            .times(1)
            .returning(|id, _, _| Ok(current(id)));
        let mut skills = MockSkillQueryMock::new();
        skills.expect_existing_ids().never();

        let command = ProjectCommand::new(valid_input(), today()).unwrap();

        UpdateProjectUseCase::new(query, repo, MockServiceQueryMock::new(), skills)
            .execute(4, command)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_project_skips_checks_and_write() {
        let mut query = MockProjectQueryMock::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ProjectQueryError::NotFound));
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_update().never();
        let mut skills = MockSkillQueryMock::new();
        skills.expect_existing_ids().never();

        let input = ProjectInput {
            skill_ids: Some(vec![1]),
            ..valid_input()
        };
        let command = ProjectCommand::new(input, today()).unwrap();
        let result = UpdateProjectUseCase::new(query, repo, MockServiceQueryMock::new(), skills)
            .execute(4, command)
            .await;

        assert!(matches!(result, Err(UpdateProjectError::NotFound)));
    }

    #[tokio::test]
    async fn unknown_service_is_invalid_link() {
        let mut query = MockProjectQueryMock::new();
        query.expect_get_by_id().returning(|id| Ok(current(id)));
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_update().never();
        let mut services = MockServiceQueryMock::new();
        services.expect_existing_ids().returning(|_| Ok(vec![]));

        let input = ProjectInput {
            service_ids: Some(vec![8]),
            ..valid_input()
        };
        let command = ProjectCommand::new(input, today()).unwrap();
        let result = UpdateProjectUseCase::new(query, repo, services, MockSkillQueryMock::new())
            .execute(4, command)
            .await;

        assert!(matches!(result, Err(UpdateProjectError::InvalidLinks(_))));
    }
}
