use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::domain::entities::ContentType;
use crate::modules::content::application::ports::outgoing::{ContentListFilter, ContentSort};
use crate::modules::content::application::use_cases::list_content::{
    ListContentError, ADMIN_CONTENT_PER_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::shared::validation::ValidationErrors;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
pub struct ListContentQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListContentQuery {
    fn into_parts(self) -> Result<(ContentListFilter, PageRequest), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let content_type = match self.content_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<ContentType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.add("type", "The selected type is invalid.");
                    None
                }
            },
        };

        let filter = ContentListFilter {
            search: self.search,
            content_type,
            sort: ContentSort::Display,
        };
        let page = PageRequest::new(self.page, self.per_page, ADMIN_CONTENT_PER_PAGE);

        errors.finish((filter, page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/admin/portfolio")]
pub async fn list_content_handler(
    _admin: AdminUser,
    query: web::Query<ListContentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = match query.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.content.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListContentError::RepositoryError(msg)) => {
            error!("Failed to list portfolio content: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/admin/portfolio/types")]
pub async fn list_content_types_handler(_admin: AdminUser) -> impl Responder {
    ApiResponse::success(ContentType::ALL)
}
