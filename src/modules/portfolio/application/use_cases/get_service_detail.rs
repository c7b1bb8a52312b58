use std::sync::Arc;

use crate::modules::portfolio::application::domain::service_detail::{
    RELATED_SERVICES_LIMIT, SERVICE_PROJECTS_LIMIT,
};
use crate::modules::portfolio::application::domain::ServiceDetail;
use crate::modules::project::application::domain::ProjectCard;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::service::application::domain::ServiceView;
use crate::modules::service::application::ports::outgoing::{ServiceQuery, ServiceQueryError};
use crate::modules::skill::application::domain::SkillView;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::i18n::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetServiceDetailError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetServiceDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<ServiceDetail, GetServiceDetailError>;
}

#[derive(Clone)]
pub struct GetServiceDetailUseCase {
    services: Arc<dyn ServiceQuery>,
    projects: Arc<dyn ProjectQuery>,
    skills: Arc<dyn SkillQuery>,
}

impl GetServiceDetailUseCase {
    pub fn new(
        services: Arc<dyn ServiceQuery>,
        projects: Arc<dyn ProjectQuery>,
        skills: Arc<dyn SkillQuery>,
    ) -> Self {
        Self {
            services,
            projects,
            skills,
        }
    }
}

#[async_trait::async_trait]
impl IGetServiceDetailUseCase for GetServiceDetailUseCase {
    async fn execute(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<ServiceDetail, GetServiceDetailError> {
        let service = self
            .services
            .get_active_by_slug(slug)
            .await
            .map_err(|e| match e {
                ServiceQueryError::NotFound => GetServiceDetailError::NotFound,
                other => GetServiceDetailError::RepositoryError(other.to_string()),
            })?;

        let (projects, related) = futures::try_join!(
            async {
                self.projects
                    .list_active_for_service(service.id, SERVICE_PROJECTS_LIMIT)
                    .await
                    .map_err(|e| GetServiceDetailError::RepositoryError(e.to_string()))
            },
            async {
                self.services
                    .related_active(service.id, RELATED_SERVICES_LIMIT)
                    .await
                    .map_err(|e| GetServiceDetailError::RepositoryError(e.to_string()))
            },
        )?;

        let skills = if projects.is_empty() {
            Vec::new()
        } else {
            let project_ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
            self.skills
                .list_active_for_projects(&project_ids)
                .await
                .map_err(|e| GetServiceDetailError::RepositoryError(e.to_string()))?
        };

        Ok(ServiceDetail {
            service: ServiceView::localize(&service, locale),
            projects: projects
                .iter()
                .map(|p| ProjectCard::localize(p, locale))
                .collect(),
            skills: skills
                .iter()
                .map(|s| SkillView::localize(s, locale))
                .collect(),
            related_services: related
                .iter()
                .map(|s| ServiceView::localize(s, locale))
                .collect(),
        })
    }
}
