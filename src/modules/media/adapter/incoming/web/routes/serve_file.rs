use actix_web::{get, http::header, web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::error;

use crate::modules::media::application::domain::StoredPath;
use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};
use crate::shared::api::ApiResponse;

fn file_not_found() -> HttpResponse {
    ApiResponse::not_found("FILE_NOT_FOUND", "File not found")
}

#[get("/storage/{dir}/{file}")]
pub async fn serve_file_handler(
    path: web::Path<(String, String)>,
    storage: web::Data<Arc<dyn FileStorage>>,
) -> impl Responder {
    let (dir, file) = path.into_inner();

    let Some(stored) = StoredPath::parse(&dir, &file) else {
        return file_not_found();
    };
    let Some(kind) = stored.kind() else {
        return file_not_found();
    };

    match storage.read(&stored).await {
        Ok(bytes) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, kind.mime()))
            .insert_header((header::CACHE_CONTROL, "public, max-age=604800"))
            .body(bytes),
        Err(FileStorageError::NotFound) | Err(FileStorageError::NotOwned) => file_not_found(),
        Err(FileStorageError::Io(e)) => {
            error!("Failed to read stored file {}/{}: {}", dir, file, e);
            ApiResponse::internal_error()
        }
    }
}
