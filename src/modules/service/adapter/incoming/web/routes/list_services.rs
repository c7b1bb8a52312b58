use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::domain::ServiceView;
use crate::modules::service::application::ports::outgoing::ServiceListFilter;
use crate::modules::service::application::use_cases::list_public_services::ListPublicServicesError;
use crate::modules::service::application::use_cases::list_services::{
    ListServicesError, ADMIN_SERVICES_PER_PAGE,
};
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Locale;
use crate::shared::pagination::{PageRequest, Trashed};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListServicesQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub trashed: Trashed,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/admin/services")]
pub async fn list_services_handler(
    _admin: AdminUser,
    query: web::Query<ListServicesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = ServiceListFilter {
        search: query.search,
        trashed: query.trashed,
    };
    let page = PageRequest::new(query.page, query.per_page, ADMIN_SERVICES_PER_PAGE);

    match data.service.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListServicesError::RepositoryError(msg)) => {
            error!("Failed to list services: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Active services for the current locale.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Public",
    responses(
        (status = 200, description = "Active services in display order", body = [ServiceView]),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/services")]
pub async fn list_public_services_handler(
    locale: Locale,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.list_public.execute(locale).await {
        Ok(services) => ApiResponse::success(services),
        Err(ListPublicServicesError::RepositoryError(msg)) => {
            error!("Failed to list public services: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service::application::domain::entities::tests::service;
    use crate::modules::service::application::domain::ServiceRecord;
    use crate::modules::service::application::use_cases::list_public_services::IListPublicServicesUseCase;
    use crate::modules::service::application::use_cases::list_services::IListServicesUseCase;
    use crate::shared::i18n::LOCALE_COOKIE;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingList {
        seen: Arc<Mutex<Option<(ServiceListFilter, PageRequest)>>>,
    }

    #[async_trait]
    impl IListServicesUseCase for RecordingList {
        async fn execute(
            &self,
            filter: ServiceListFilter,
            page: PageRequest,
        ) -> Result<PageResult<ServiceRecord>, ListServicesError> {
            *self.seen.lock().unwrap() = Some((filter, page));
            Ok(PageResult {
                items: vec![service(1)],
                page: page.page,
                per_page: page.per_page,
                total: 1,
            })
        }
    }

    #[derive(Clone)]
    struct StubPublic(Result<(), ListPublicServicesError>);

    #[async_trait]
    impl IListPublicServicesUseCase for StubPublic {
        async fn execute(
            &self,
            locale: Locale,
        ) -> Result<Vec<ServiceView>, ListPublicServicesError> {
            self.0.clone()?;
            let mut record = service(1);
            record.title_ar = Some("خدمة".to_string());
            Ok(vec![ServiceView::localize(&record, locale)])
        }
    }

    #[actix_web::test]
    async fn test_admin_list_reads_trashed_filter() {
        let list = RecordingList::default();
        let state = TestAppStateBuilder::default()
            .with_list_services(list.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_services_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/services?trashed=with&search=api&per_page=5")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let (filter, page) = list.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.trashed, Trashed::With);
        assert_eq!(filter.search.as_deref(), Some("api"));
        assert_eq!(page.per_page, 5);
    }

    #[actix_web::test]
    async fn test_admin_list_requires_token() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_services_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin/services").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_public_list_uses_locale_cookie() {
        let state = TestAppStateBuilder::default()
            .with_list_public_services(StubPublic(Ok(())))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_public_services_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/services")
            .cookie(Cookie::new(LOCALE_COOKIE, "ar"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["title"], "خدمة");
    }

    #[actix_web::test]
    async fn test_public_list_repository_error() {
        let state = TestAppStateBuilder::default()
            .with_list_public_services(StubPublic(Err(
                ListPublicServicesError::RepositoryError("down".to_string()),
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_public_services_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/services").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
