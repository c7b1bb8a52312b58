use std::fmt::Display;
use std::sync::Arc;

use crate::modules::content::application::domain::ContentType;
use crate::modules::content::application::ports::outgoing::ContentQuery;
use crate::modules::portfolio::application::domain::portfolio_data::{
    PortfolioSources, ACADEMIC_BACKGROUND_KEY, EXPERTISE_AREAS_KEY,
};
use crate::modules::portfolio::application::domain::PortfolioData;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::modules::statistic::application::ports::outgoing::StatisticQuery;
use crate::shared::i18n::Locale;

pub const RECENT_POSTS_LIMIT: u64 = 3;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn repository_error(e: impl Display) -> GetPortfolioError {
    GetPortfolioError::RepositoryError(e.to_string())
}

#[async_trait::async_trait]
pub trait IGetPortfolioUseCase: Send + Sync {
    async fn execute(&self, locale: Locale) -> Result<PortfolioData, GetPortfolioError>;
}

/// Reads every entity behind the public pages concurrently and localizes the
/// result for one request.
#[derive(Clone)]
pub struct GetPortfolioUseCase {
    services: Arc<dyn ServiceQuery>,
    projects: Arc<dyn ProjectQuery>,
    skills: Arc<dyn SkillQuery>,
    statistics: Arc<dyn StatisticQuery>,
    content: Arc<dyn ContentQuery>,
}

impl GetPortfolioUseCase {
    pub fn new(
        services: Arc<dyn ServiceQuery>,
        projects: Arc<dyn ProjectQuery>,
        skills: Arc<dyn SkillQuery>,
        statistics: Arc<dyn StatisticQuery>,
        content: Arc<dyn ContentQuery>,
    ) -> Self {
        Self {
            services,
            projects,
            skills,
            statistics,
            content,
        }
    }
}

#[async_trait::async_trait]
impl IGetPortfolioUseCase for GetPortfolioUseCase {
    async fn execute(&self, locale: Locale) -> Result<PortfolioData, GetPortfolioError> {
        let (
            services,
            projects,
            skills,
            statistics,
            personal,
            academic_background,
            expertise_areas,
            testimonials,
            recent_posts,
        ) = futures::try_join!(
            async { self.services.list_active().await.map_err(repository_error) },
            async { self.projects.list_latest_active().await.map_err(repository_error) },
            async { self.skills.list_active().await.map_err(repository_error) },
            async { self.statistics.list_active().await.map_err(repository_error) },
            async {
                self.content
                    .list_active_by_type(ContentType::Personal, Some(1))
                    .await
                    .map_err(repository_error)
            },
            async {
                self.content
                    .find_active_by_key(ACADEMIC_BACKGROUND_KEY)
                    .await
                    .map_err(repository_error)
            },
            async {
                self.content
                    .find_active_by_key(EXPERTISE_AREAS_KEY)
                    .await
                    .map_err(repository_error)
            },
            async {
                self.content
                    .list_active_by_type(ContentType::Testimonial, None)
                    .await
                    .map_err(repository_error)
            },
            async {
                self.content
                    .latest_active_by_type(ContentType::BlogPost, RECENT_POSTS_LIMIT)
                    .await
                    .map_err(repository_error)
            },
        )?;

        let sources = PortfolioSources {
            services,
            projects,
            skills,
            statistics,
            personal: personal.into_iter().next(),
            academic_background,
            expertise_areas,
            testimonials,
            recent_posts,
        };

        Ok(PortfolioData::assemble(sources, locale))
    }
}
