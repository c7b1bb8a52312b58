use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::use_cases::delete_message::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/admin/messages/{id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(DeleteMessageError::RepositoryError(e)) => {
            error!("Failed to delete contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::use_cases::delete_message::IDeleteMessageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct StubDelete(Result<(), DeleteMessageError>);

    #[async_trait]
    impl IDeleteMessageUseCase for StubDelete {
        async fn execute(&self, _id: i32) -> Result<(), DeleteMessageError> {
            self.0.clone()
        }
    }

    async fn delete(stub: StubDelete) -> StatusCode {
        let state = TestAppStateBuilder::default().with_delete_message(stub).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_message_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/admin/messages/5")
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_message_success() {
        assert_eq!(delete(StubDelete(Ok(()))).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_message_wrong_type_is_not_found() {
        assert_eq!(
            delete(StubDelete(Err(DeleteMessageError::NotFound))).await,
            StatusCode::NOT_FOUND
        );
    }
}
