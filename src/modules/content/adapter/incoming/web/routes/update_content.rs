use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::use_cases::content_command::{
    ContentCommand, ContentInput,
};
use crate::modules::content::application::use_cases::update_content::UpdateContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/portfolio/{id}")]
pub async fn update_content_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<ContentInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match ContentCommand::new(req.into_inner()) {
        Ok(command) => command,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.content.update.execute(id, command).await {
        Ok(updated) => {
            info!(id, "Portfolio content updated");
            ApiResponse::success(updated)
        }
        Err(UpdateContentError::NotFound) => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(UpdateContentError::KeyAlreadyExists) => {
            ApiResponse::conflict("KEY_ALREADY_EXISTS", "Content key already exists")
        }
        Err(UpdateContentError::RepositoryError(e)) => {
            error!("Repository error updating content {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
