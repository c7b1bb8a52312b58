use actix_web::{delete, post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::service::application::use_cases::archive_service::ArchiveServiceError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::ArchiveAction;
use crate::AppState;

async fn archive(data: &AppState, id: i32, action: ArchiveAction) -> HttpResponse {
    match data.service.archive.execute(id, action).await {
        Ok(()) => {
            info!(id, ?action, "Service archive action applied");
            ApiResponse::no_content()
        }
        Err(ArchiveServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(ArchiveServiceError::RepositoryError(e)) => {
            error!("Repository error archiving service {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/admin/services/{id}")]
pub async fn delete_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::SoftDelete).await
}

#[post("/admin/services/{id}/restore")]
pub async fn restore_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::Restore).await
}

#[delete("/admin/services/{id}/force")]
pub async fn force_delete_service_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    archive(&data, path.into_inner(), ArchiveAction::Force).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service::application::use_cases::archive_service::IArchiveServiceUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingArchive {
        actions: Arc<Mutex<Vec<(i32, ArchiveAction)>>>,
        missing: bool,
    }

    #[async_trait]
    impl IArchiveServiceUseCase for RecordingArchive {
        async fn execute(&self, id: i32, action: ArchiveAction) -> Result<(), ArchiveServiceError> {
            if self.missing {
                return Err(ArchiveServiceError::NotFound);
            }
            self.actions.lock().unwrap().push((id, action));
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_routes_map_to_archive_actions() {
        let stub = RecordingArchive::default();
        let state = TestAppStateBuilder::default()
            .with_archive_service(stub.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_service_handler)
                .service(restore_service_handler)
                .service(force_delete_service_handler),
        )
        .await;

        for req in [
            test::TestRequest::delete().uri("/admin/services/1"),
            test::TestRequest::post().uri("/admin/services/1/restore"),
            test::TestRequest::delete().uri("/admin/services/1/force"),
        ] {
            let resp = test::call_service(&app, req.insert_header(bearer()).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        }

        assert_eq!(
            *stub.actions.lock().unwrap(),
            vec![
                (1, ArchiveAction::SoftDelete),
                (1, ArchiveAction::Restore),
                (1, ArchiveAction::Force),
            ]
        );
    }

    #[actix_web::test]
    async fn test_restore_missing_service() {
        let state = TestAppStateBuilder::default()
            .with_archive_service(RecordingArchive {
                missing: true,
                ..RecordingArchive::default()
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(restore_service_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/services/9/restore")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
