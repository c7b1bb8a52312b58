use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::use_cases::content_command::{
    ContentCommand, ContentInput,
};
use crate::modules::content::application::use_cases::create_content::CreateContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/portfolio")]
pub async fn create_content_handler(
    _admin: AdminUser,
    req: web::Json<ContentInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ContentCommand::new(req.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.content.create.execute(command).await {
        Ok(created) => {
            info!(id = created.id, "Portfolio content created");
            ApiResponse::created(created)
        }
        Err(CreateContentError::KeyAlreadyExists) => {
            ApiResponse::conflict("KEY_ALREADY_EXISTS", "Content key already exists")
        }
        Err(CreateContentError::RepositoryError(e)) => {
            error!("Repository error creating content: {}", e);
            ApiResponse::internal_error()
        }
    }
}
