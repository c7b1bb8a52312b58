use serde::Serialize;

use crate::modules::project::application::domain::ProjectCard;
use crate::modules::service::application::domain::ServiceView;
use crate::modules::skill::application::domain::SkillView;

pub const SERVICE_PROJECTS_LIMIT: u64 = 6;
pub const RELATED_SERVICES_LIMIT: u64 = 3;

/// One service with the work that showcases it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDetail {
    pub service: ServiceView,
    pub projects: Vec<ProjectCard>,
    pub skills: Vec<SkillView>,
    pub related_services: Vec<ServiceView>,
}
