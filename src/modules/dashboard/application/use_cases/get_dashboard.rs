use std::fmt::Display;
use std::sync::Arc;

use crate::modules::content::application::domain::{ContentType, PortfolioEntry};
use crate::modules::content::application::ports::outgoing::ContentQuery;
use crate::modules::dashboard::application::domain::summary::RECENT_LIMIT;
use crate::modules::dashboard::application::domain::{
    DashboardStats, DashboardSummary, RecentMessage, RecentProject,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::i18n::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn repository_error(e: impl Display) -> GetDashboardError {
    GetDashboardError::RepositoryError(e.to_string())
}

#[async_trait::async_trait]
pub trait IGetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSummary, GetDashboardError>;
}

#[derive(Clone)]
pub struct GetDashboardUseCase {
    services: Arc<dyn ServiceQuery>,
    projects: Arc<dyn ProjectQuery>,
    skills: Arc<dyn SkillQuery>,
    content: Arc<dyn ContentQuery>,
}

impl GetDashboardUseCase {
    pub fn new(
        services: Arc<dyn ServiceQuery>,
        projects: Arc<dyn ProjectQuery>,
        skills: Arc<dyn SkillQuery>,
        content: Arc<dyn ContentQuery>,
    ) -> Self {
        Self {
            services,
            projects,
            skills,
            content,
        }
    }
}

#[async_trait::async_trait]
impl IGetDashboardUseCase for GetDashboardUseCase {
    async fn execute(&self) -> Result<DashboardSummary, GetDashboardError> {
        let (services, projects, skills, messages, recent_projects, recent_messages) = futures::try_join!(
            async { self.services.count_active().await.map_err(repository_error) },
            async { self.projects.count_active().await.map_err(repository_error) },
            async { self.skills.count_active().await.map_err(repository_error) },
            async {
                self.content
                    .count_by_type(ContentType::ContactMessage)
                    .await
                    .map_err(repository_error)
            },
            async {
                self.projects
                    .recently_updated_active(RECENT_LIMIT)
                    .await
                    .map_err(repository_error)
            },
            async {
                self.content
                    .latest_active_by_type(ContentType::ContactMessage, RECENT_LIMIT)
                    .await
                    .map_err(repository_error)
            },
        )?;

        Ok(DashboardSummary {
            stats: DashboardStats {
                services,
                projects,
                skills,
                messages,
            },
            recent_projects: recent_projects.iter().map(RecentProject::from).collect(),
            recent_messages: recent_messages
                .iter()
                .filter_map(|r| PortfolioEntry::from_record(r, Locale::En).into_contact_message())
                .map(RecentMessage::from)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::entities::tests::record;
    use crate::modules::content::application::ports::outgoing::mocks::MockContentQueryMock;
    use crate::modules::project::application::domain::entities::tests::project;
    use crate::modules::project::application::ports::outgoing::mocks::MockProjectQueryMock;
    use crate::modules::project::application::ports::outgoing::ProjectQueryError;
    use crate::modules::service::application::ports::outgoing::mocks::MockServiceQueryMock;
    use crate::modules::skill::application::ports::outgoing::mocks::MockSkillQueryMock;

    fn use_case(projects: MockProjectQueryMock) -> GetDashboardUseCase {
        let mut services = MockServiceQueryMock::new();
        services.expect_count_active().returning(|| Ok(4));

        let mut skills = MockSkillQueryMock::new();
        skills.expect_count_active().returning(|| Ok(21));

        let mut content = MockContentQueryMock::new();
        content
            .expect_count_by_type()
            .withf(|t| *t == ContentType::ContactMessage)
            .returning(|_| Ok(9));
        content
            .expect_latest_active_by_type()
            .withf(|t, limit| *t == ContentType::ContactMessage && *limit == RECENT_LIMIT)
            .returning(|_, _| Ok(vec![record(ContentType::ContactMessage)]));

        GetDashboardUseCase::new(
            Arc::new(services),
            Arc::new(projects),
            Arc::new(skills),
            Arc::new(content),
        )
    }

    #[tokio::test]
    async fn summarises_counts_and_recent_rows() {
        let mut projects = MockProjectQueryMock::new();
        projects.expect_count_active().returning(|| Ok(12));
        projects
            .expect_recently_updated_active()
            .withf(|limit| *limit == RECENT_LIMIT)
            .returning(|_| Ok(vec![project(2), project(1)]));

        let summary = use_case(projects).execute().await.unwrap();

        assert_eq!(
            summary.stats,
            DashboardStats {
                services: 4,
                projects: 12,
                skills: 21,
                messages: 9,
            }
        );
        assert_eq!(
            summary.recent_projects.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(summary.recent_messages.len(), 1);
    }

    #[tokio::test]
    async fn failing_count_is_repository_error() {
        let mut projects = MockProjectQueryMock::new();
        projects
            .expect_count_active()
            .returning(|| Err(ProjectQueryError::DatabaseError("down".to_string())));
        projects
            .expect_recently_updated_active()
            .returning(|_| Ok(vec![]));

        let result = use_case(projects).execute().await;

        assert!(matches!(result, Err(GetDashboardError::RepositoryError(_))));
    }
}
