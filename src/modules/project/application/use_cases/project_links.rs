use crate::modules::project::application::ports::outgoing::LinkUpdate;
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkCheckError {
    #[error(transparent)]
    Invalid(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn report_missing(errors: &mut ValidationErrors, field: &str, requested: &[i32], found: &[i32]) {
    for id in requested.iter().filter(|id| !found.contains(id)) {
        errors.add(field, format!("The selected {field} {id} is invalid."));
    }
}

/// Every requested service and skill id must name an existing row.
pub async fn check_links<S, K>(
    services: &S,
    skills: &K,
    links: &LinkUpdate,
) -> Result<(), LinkCheckError>
where
    S: ServiceQuery + ?Sized,
    K: SkillQuery + ?Sized,
{
    let mut errors = ValidationErrors::new();

    if let Some(ids) = links.service_ids.as_deref().filter(|ids| !ids.is_empty()) {
        let found = services
            .existing_ids(ids)
            .await
            .map_err(|e| LinkCheckError::RepositoryError(e.to_string()))?;
        report_missing(&mut errors, "service_ids", ids, &found);
    }

    if let Some(ids) = links.skill_ids.as_deref().filter(|ids| !ids.is_empty()) {
        let found = skills
            .existing_ids(ids)
            .await
            .map_err(|e| LinkCheckError::RepositoryError(e.to_string()))?;
        report_missing(&mut errors, "skill_ids", ids, &found);
    }

    errors.finish(()).map_err(LinkCheckError::Invalid)
}
