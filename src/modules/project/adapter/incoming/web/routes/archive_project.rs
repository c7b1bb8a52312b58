use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::use_cases::archive_project::ArchiveProjectError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::ArchiveAction;
use crate::AppState;

async fn archive(data: &AppState, id: i32, action: ArchiveAction) -> HttpResponse {
    match data.project.archive.execute(id, action).await {
        Ok(()) => {
            info!(id, ?action, "Project archive action applied");
            ApiResponse::no_content()
        }
        Err(ArchiveProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(ArchiveProjectError::RepositoryError(e)) => {
            error!("Repository error archiving project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::SoftDelete).await
}

#[post("/admin/projects/{id}/restore")]
pub async fn restore_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::Restore).await
}

#[delete("/admin/projects/{id}/force")]
pub async fn force_delete_project_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::Force).await
}
