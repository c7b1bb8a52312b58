use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::use_cases::get_message::GetMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/messages/{id}")]
pub async fn get_message_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.get.execute(id).await {
        Ok(message) => ApiResponse::success(message),
        Err(GetMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(GetMessageError::RepositoryError(e)) => {
            error!("Failed to fetch contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
