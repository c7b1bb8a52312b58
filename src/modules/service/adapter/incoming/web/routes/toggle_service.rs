use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::use_cases::toggle_service::ToggleServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/services/{id}/toggle")]
pub async fn toggle_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.service.toggle.execute(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(ToggleServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(ToggleServiceError::RepositoryError(e)) => {
            error!("Repository error toggling service {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
