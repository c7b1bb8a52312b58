use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::use_cases::get_service::GetServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/services/{id}")]
pub async fn get_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.service.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(GetServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(GetServiceError::RepositoryError(e)) => {
            error!("Repository error fetching service {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
