use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::use_cases::get_project::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/projects/{id}")]
pub async fn get_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get.execute(id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetProjectError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
