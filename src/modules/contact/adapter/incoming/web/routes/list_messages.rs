use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::use_cases::list_messages::{
    ListMessagesError, MESSAGES_PER_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/admin/messages")]
pub async fn list_messages_handler(
    _admin: AdminUser,
    query: web::Query<ListMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, MESSAGES_PER_PAGE);

    match data.contact.list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListMessagesError::RepositoryError(e)) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
