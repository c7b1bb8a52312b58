use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::use_cases::delete_content::DeleteContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/admin/portfolio/{id}")]
pub async fn delete_content_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.content.delete.execute(id).await {
        Ok(()) => {
            info!(id, "Portfolio content deleted");
            ApiResponse::no_content()
        }
        Err(DeleteContentError::NotFound) => {
            ApiResponse::not_found("CONTENT_NOT_FOUND", "Content not found")
        }
        Err(DeleteContentError::RepositoryError(e)) => {
            error!("Repository error deleting content {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::use_cases::delete_content::IDeleteContentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct StubDelete(Result<(), DeleteContentError>);

    #[async_trait]
    impl IDeleteContentUseCase for StubDelete {
        async fn execute(&self, _id: i32) -> Result<(), DeleteContentError> {
            self.0.clone()
        }
    }

    async fn delete(stub: StubDelete) -> StatusCode {
        let state = TestAppStateBuilder::default().with_delete_content(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_content_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/admin/portfolio/3")
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_content_success() {
        assert_eq!(delete(StubDelete(Ok(()))).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_content_not_found() {
        assert_eq!(
            delete(StubDelete(Err(DeleteContentError::NotFound))).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_delete_content_repository_error() {
        assert_eq!(
            delete(StubDelete(Err(DeleteContentError::RepositoryError("x".into())))).await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
