use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::use_cases::create_service::CreateServiceError;
use crate::modules::service::application::use_cases::service_command::{
    ServiceCommand, ServiceInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/services")]
pub async fn create_service_handler(
    _admin: AdminUser,
    req: web::Json<ServiceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ServiceCommand::new(req.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.service.create.execute(command).await {
        Ok(created) => {
            info!(id = created.id, "Service created");
            ApiResponse::created(created)
        }
        Err(CreateServiceError::SlugAlreadyExists) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A service with this title already exists",
        ),
        Err(CreateServiceError::RepositoryError(e)) => {
            error!("Repository error creating service: {}", e);
            ApiResponse::internal_error()
        }
    }
}
