use actix_web::{http::header, post, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::media::application::domain::UploadRejection;
use crate::modules::project::application::use_cases::upload_thumbnail::UploadThumbnailError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::ValidationErrors;
use crate::AppState;

/// Raw image body; the `Content-Type` header names the format.
#[post("/admin/projects/{id}/thumbnail")]
pub async fn upload_thumbnail_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match data
        .project
        .upload_thumbnail
        .execute(id, content_type, &body)
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(UploadThumbnailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UploadThumbnailError::Rejected(UploadRejection::Empty)) => {
            let mut errors = ValidationErrors::new();
            errors.add("thumbnail", "The thumbnail field is required.");
            ApiResponse::validation_error(errors)
        }
        Err(UploadThumbnailError::Rejected(rejection @ UploadRejection::TooLarge { .. })) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &rejection.to_string())
        }
        Err(UploadThumbnailError::Rejected(rejection)) => {
            ApiResponse::unsupported_media_type("UNSUPPORTED_MEDIA_TYPE", &rejection.to_string())
        }
        Err(UploadThumbnailError::StorageError(e)) => {
            error!("Storage error saving thumbnail for project {}: {}", id, e);
            ApiResponse::internal_error()
        }
        Err(UploadThumbnailError::RepositoryError(e)) => {
            error!("Repository error saving thumbnail for project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::domain::upload_policy::tests::PNG_BYTES;
    use crate::modules::media::application::domain::ImageKind;
    use crate::modules::project::application::domain::entities::tests::project;
    use crate::modules::project::application::domain::ProjectRecord;
    use crate::modules::project::application::use_cases::upload_thumbnail::IUploadThumbnailUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingUpload {
        seen: Arc<Mutex<Option<(Option<String>, usize)>>>,
        outcome: Option<UploadThumbnailError>,
    }

    #[async_trait]
    impl IUploadThumbnailUseCase for RecordingUpload {
        async fn execute(
            &self,
            id: i32,
            content_type: Option<&str>,
            bytes: &[u8],
        ) -> Result<ProjectRecord, UploadThumbnailError> {
            *self.seen.lock().unwrap() = Some((content_type.map(str::to_string), bytes.len()));
            if let Some(e) = self.outcome.clone() {
                return Err(e);
            }
            let mut record = project(id);
            record.thumbnail_url = Some("/storage/projects/abc.png".to_string());
            Ok(record)
        }
    }

    async fn upload(stub: RecordingUpload) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_upload_thumbnail(stub)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(upload_thumbnail_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/projects/5/thumbnail")
            .insert_header(bearer())
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .set_payload(PNG_BYTES)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn rejected(rejection: UploadRejection) -> RecordingUpload {
        RecordingUpload {
            outcome: Some(UploadThumbnailError::Rejected(rejection)),
            ..RecordingUpload::default()
        }
    }

    #[actix_web::test]
    async fn test_upload_passes_body_and_type() {
        let stub = RecordingUpload::default();
        let (status, body) = upload(stub.clone()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["thumbnail_url"], "/storage/projects/abc.png");
        assert_eq!(
            stub.seen.lock().unwrap().clone(),
            Some((Some("image/png".to_string()), PNG_BYTES.len()))
        );
    }

    #[actix_web::test]
    async fn test_rejections_map_to_statuses() {
        let (status, body) = upload(rejected(UploadRejection::Empty)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["fields"]["thumbnail"].is_array());

        let (status, body) = upload(rejected(UploadRejection::TooLarge { limit: 10 })).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");

        let (status, _) = upload(rejected(UploadRejection::SignatureMismatch {
            declared: ImageKind::Png,
        }))
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[actix_web::test]
    async fn test_missing_project() {
        let (status, body) = upload(RecordingUpload {
            outcome: Some(UploadThumbnailError::NotFound),
            ..RecordingUpload::default()
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
