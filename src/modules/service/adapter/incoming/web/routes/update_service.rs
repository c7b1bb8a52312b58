use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::use_cases::service_command::{
    ServiceCommand, ServiceInput,
};
use crate::modules::service::application::use_cases::update_service::UpdateServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/services/{id}")]
pub async fn update_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<ServiceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match ServiceCommand::new(req.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.service.update.execute(id, command).await {
        Ok(updated) => {
            info!(id, "Service updated");
            ApiResponse::success(updated)
        }
        Err(UpdateServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(UpdateServiceError::SlugAlreadyExists) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A service with this title already exists",
        ),
        Err(UpdateServiceError::RepositoryError(e)) => {
            error!("Repository error updating service {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
