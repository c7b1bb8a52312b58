use actix_web::{put, web, Responder};
use chrono::Utc;
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::use_cases::project_command::{
    ProjectCommand, ProjectInput,
};
use crate::modules::project::application::use_cases::update_project::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match ProjectCommand::new(req.into_inner(), Utc::now().date_naive()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.project.update.execute(id, command).await {
        Ok(updated) => {
            info!(id, "Project updated");
            ApiResponse::success(updated)
        }
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::InvalidLinks(errors)) => ApiResponse::validation_error(errors),
        Err(UpdateProjectError::SlugAlreadyExists) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A project with this title already exists",
        ),
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
