use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::modules::portfolio::application::use_cases::get_portfolio::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Locale;
use crate::shared::page::PageView;
use crate::AppState;

/// Path and query of the request, as echoed back in the page payload.
pub(super) fn page_url(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string())
}

async fn render(
    component: &'static str,
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.portfolio.get.execute(locale).await {
        Ok(portfolio) => PageView::new(component, portfolio, locale, page_url(&req)).render(),
        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Failed to assemble {} page: {}", component, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/")]
pub async fn home_page_handler(
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    render("Home", req, locale, data).await
}

#[get("/about")]
pub async fn about_page_handler(
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    render("About", req, locale, data).await
}

#[get("/skills")]
pub async fn skills_page_handler(
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    render("Skills", req, locale, data).await
}

#[get("/projects")]
pub async fn projects_page_handler(
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    render("Projects", req, locale, data).await
}

#[get("/contact")]
pub async fn contact_page_handler(
    req: HttpRequest,
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    render("Contact", req, locale, data).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::portfolio_data::PortfolioSources;
    use crate::modules::portfolio::application::domain::PortfolioData;
    use crate::modules::portfolio::application::use_cases::get_portfolio::IGetPortfolioUseCase;
    use crate::shared::i18n::LOCALE_COOKIE;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    #[derive(Clone)]
    pub struct StubPortfolio(pub Result<(), GetPortfolioError>);

    #[async_trait]
    impl IGetPortfolioUseCase for StubPortfolio {
        async fn execute(&self, locale: Locale) -> Result<PortfolioData, GetPortfolioError> {
            self.0
                .clone()
                .map(|()| PortfolioData::assemble(PortfolioSources::default(), locale))
        }
    }

    async fn visit(uri: &str, locale: Option<&str>, stub: StubPortfolio) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_get_portfolio(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(home_page_handler)
                .service(about_page_handler)
                .service(skills_page_handler)
                .service(projects_page_handler)
                .service(contact_page_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some(code) = locale {
            req = req.cookie(Cookie::new(LOCALE_COOKIE, code.to_string()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn each_page_names_its_component() {
        for (uri, component) in [
            ("/", "Home"),
            ("/about", "About"),
            ("/skills", "Skills"),
            ("/projects", "Projects"),
            ("/contact", "Contact"),
        ] {
            let (status, body) = visit(uri, None, StubPortfolio(Ok(()))).await;

            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["component"], component);
            assert_eq!(body["url"], uri);
            assert_eq!(body["props"]["data"]["name"], "Ziad Hassan");
        }
    }

    #[actix_web::test]
    async fn arabic_cookie_switches_direction() {
        let (status, body) = visit("/about?tab=cv", Some("ar"), StubPortfolio(Ok(()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locale"], "ar");
        assert_eq!(body["direction"], "rtl");
        assert_eq!(body["url"], "/about?tab=cv");
    }

    #[actix_web::test]
    async fn unknown_cookie_falls_back_to_english() {
        let (_, body) = visit("/", Some("fr"), StubPortfolio(Ok(()))).await;

        assert_eq!(body["locale"], "en");
        assert_eq!(body["direction"], "ltr");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let (status, body) = visit(
            "/skills",
            None,
            StubPortfolio(Err(GetPortfolioError::RepositoryError("db".to_string()))),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
