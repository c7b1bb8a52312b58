use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::use_cases::toggle_project::{
    ProjectFlag, ToggleProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn toggle(data: &AppState, id: i32, flag: ProjectFlag) -> HttpResponse {
    match data.project.toggle.execute(id, flag).await {
        Ok(record) => {
            info!(id, ?flag, "Project flag toggled");
            ApiResponse::success(record)
        }
        Err(ToggleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(ToggleProjectError::RepositoryError(e)) => {
            error!("Repository error toggling project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/admin/projects/{id}/toggle")]
pub async fn toggle_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    toggle(&data, path.into_inner(), ProjectFlag::Active).await
}

#[post("/admin/projects/{id}/featured")]
pub async fn toggle_featured_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    toggle(&data, path.into_inner(), ProjectFlag::Featured).await
}
