use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::ContentDetail;
use crate::modules::content::application::use_cases::get_content::GetContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/portfolio/{id}")]
pub async fn get_content_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.get.execute(id).await {
        Ok(record) => ApiResponse::success(ContentDetail::from(record)),
        Err(GetContentError::NotFound) => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(GetContentError::RepositoryError(e)) => {
            error!("Repository error fetching content {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
