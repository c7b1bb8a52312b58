use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;

use super::pages::page_url;
use crate::modules::portfolio::application::domain::{PortfolioData, ServiceDetail};
use crate::modules::portfolio::application::use_cases::get_service_detail::GetServiceDetailError;
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Locale;
use crate::shared::page::PageView;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceDetailPage {
    #[serde(flatten)]
    pub detail: ServiceDetail,
    pub data: PortfolioData,
}

#[get("/services/{slug}")]
pub async fn service_detail_handler(
    req: HttpRequest,
    path: web::Path<String>,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let (detail, portfolio) = futures::join!(
        data.portfolio.service_detail.execute(&slug, locale),
        data.portfolio.get.execute(locale),
    );

    let detail = match detail {
        Ok(detail) => detail,
        Err(GetServiceDetailError::NotFound) => {
            return ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(GetServiceDetailError::RepositoryError(e)) => {
            error!("Repository error loading service {}: {}", slug, e);
            return ApiResponse::internal_error();
        }
    };

    match portfolio {
        Ok(portfolio) => PageView::new(
            "ServiceDetail",
            ServiceDetailPage {
                detail,
                data: portfolio,
            },
            locale,
            page_url(&req),
        )
        .render(),
        Err(e) => {
            error!("Failed to assemble portfolio for service {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
