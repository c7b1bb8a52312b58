use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::project::application::use_cases::list_project_categories::ListProjectCategoriesError;
use crate::modules::project::application::use_cases::list_projects::{
    ListProjectsError, ADMIN_PROJECTS_PER_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult, Trashed};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub featured: Option<String>,
    #[serde(default)]
    pub trashed: Trashed,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Query-string boolean: `1/true/on/yes` and `0/false/off/no`; anything else
/// is no filter.
pub(super) fn query_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[get("/admin/projects")]
pub async fn list_projects_handler(
    _admin: AdminUser,
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, ADMIN_PROJECTS_PER_PAGE);

    let category = match query.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        None => None,
        Some(raw) => match raw.parse() {
            Ok(category) => Some(category),
            // No row can carry a category outside the closed set.
            Err(_) => return ApiResponse::success(PageResult::<()>::empty(page)),
        },
    };

    let filter = ProjectListFilter {
        search: query.search,
        category,
        featured: query_flag(query.featured.as_deref()),
        trashed: query.trashed,
        active_only: false,
    };

    match data.project.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListProjectsError::RepositoryError(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/admin/projects/categories")]
pub async fn list_project_categories_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(ListProjectCategoriesError::RepositoryError(msg)) => {
            error!("Failed to list project categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod query_flag_tests {
    use super::query_flag;

    #[test]
    fn query_flag_reads_common_spellings() {
        assert_eq!(query_flag(Some("1")), Some(true));
        assert_eq!(query_flag(Some("TRUE")), Some(true));
        assert_eq!(query_flag(Some("off")), Some(false));
        assert_eq!(query_flag(Some("maybe")), None);
        assert_eq!(query_flag(None), None);
    }
}
