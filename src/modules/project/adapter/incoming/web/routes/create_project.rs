use actix_web::{post, web, Responder};
use chrono::Utc;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::use_cases::create_project::CreateProjectError;
use crate::modules::project::application::use_cases::project_command::{
    ProjectCommand, ProjectInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ProjectCommand::new(req.into_inner(), Utc::now().date_naive()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.project.create.execute(command).await {
        Ok(created) => {
            info!(id = created.id, slug = %created.slug, "Project created");
            ApiResponse::created(created)
        }
        Err(CreateProjectError::InvalidLinks(errors)) => ApiResponse::validation_error(errors),
        Err(CreateProjectError::SlugAlreadyExists) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A project with this title already exists",
        ),
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
