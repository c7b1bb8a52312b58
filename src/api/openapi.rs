use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginAdminRequestDto, LoginAdminResponse,
};
use crate::modules::project::application::domain::{ProjectCard, ProjectCategory, UrlType};
use crate::modules::service::application::domain::ServiceView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public portfolio JSON endpoints and admin login"
    ),
    paths(
        crate::modules::service::adapter::incoming::web::routes::list_services::list_public_services_handler,
        crate::modules::project::adapter::incoming::web::routes::public_projects::list_public_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::public_projects::list_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::public_projects::list_projects_by_category_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ServiceView,
            ProjectCard,
            ProjectCategory,
            UrlType,
            LoginAdminRequestDto,
            LoginAdminResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Public", description = "Localized portfolio data"),
        (name = "Admin", description = "Admin authentication"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /admin/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api/openapi.json")]
pub async fn openapi_json_handler() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
