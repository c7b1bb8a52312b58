use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::list_projects::query_flag;
use crate::modules::project::application::domain::{ProjectCard, ProjectCategory, UnknownCategory};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::project::application::use_cases::list_public_projects::{
    ListPublicProjectsError, PUBLIC_PROJECTS_PER_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Locale;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PublicProjectsQuery {
    /// Substring matched against titles and descriptions in both languages.
    pub search: Option<String>,
    /// One of web, ai, iot, mobile, desktop.
    pub category: Option<String>,
    /// Any truthy value narrows the list to featured projects.
    pub featured: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

async fn respond(
    data: &AppState,
    filter: ProjectListFilter,
    page: PageRequest,
    locale: Locale,
) -> HttpResponse {
    match data.project.list_public.execute(filter, page, locale).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListPublicProjectsError::RepositoryError(msg)) => {
            error!("Failed to list public projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn empty_page(page: PageRequest) -> HttpResponse {
    ApiResponse::success(PageResult::<ProjectCard>::empty(page))
}

fn parse_category(raw: Option<&str>) -> Result<Option<ProjectCategory>, UnknownCategory> {
    match raw.map(str::trim).filter(|c| !c.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

/// Active projects for the current locale, filtered and paginated.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Public",
    params(PublicProjectsQuery),
    responses(
        (status = 200, description = "Page of localized projects", body = inline(PageResult<ProjectCard>)),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn list_public_projects_handler(
    locale: Locale,
    query: web::Query<PublicProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, PUBLIC_PROJECTS_PER_PAGE);

    let Ok(category) = parse_category(query.category.as_deref()) else {
        return empty_page(page);
    };

    let filter = ProjectListFilter {
        search: query.search,
        category,
        featured: query_flag(query.featured.as_deref()).filter(|featured| *featured),
        ..ProjectListFilter::default()
    };

    respond(&data, filter, page, locale).await
}

/// Featured active projects for the current locale.
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "Public",
    params(PublicProjectsQuery),
    responses(
        (status = 200, description = "Page of featured projects", body = inline(PageResult<ProjectCard>)),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects/featured")]
pub async fn list_featured_projects_handler(
    locale: Locale,
    query: web::Query<PublicProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, PUBLIC_PROJECTS_PER_PAGE);

    let filter = ProjectListFilter {
        featured: Some(true),
        ..ProjectListFilter::default()
    };

    respond(&data, filter, page, locale).await
}

/// Active projects of one category. Unknown categories give an empty page.
#[utoipa::path(
    get,
    path = "/api/projects/category/{category}",
    tag = "Public",
    params(
        ("category" = String, Path, description = "One of web, ai, iot, mobile, desktop"),
        PublicProjectsQuery
    ),
    responses(
        (status = 200, description = "Page of projects in the category", body = inline(PageResult<ProjectCard>)),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects/category/{category}")]
pub async fn list_projects_by_category_handler(
    locale: Locale,
    path: web::Path<String>,
    query: web::Query<PublicProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page, PUBLIC_PROJECTS_PER_PAGE);

    let category = match parse_category(Some(path.as_str())) {
        Ok(Some(category)) => category,
        _ => return empty_page(page),
    };

    let filter = ProjectListFilter {
        category: Some(category),
        ..ProjectListFilter::default()
    };

    respond(&data, filter, page, locale).await
}
