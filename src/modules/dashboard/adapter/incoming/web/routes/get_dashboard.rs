use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::dashboard::application::use_cases::get_dashboard::GetDashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/dashboard")]
pub async fn get_dashboard_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.execute().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(GetDashboardError::RepositoryError(e)) => {
            error!("Failed to build dashboard summary: {}", e);
            ApiResponse::internal_error()
        }
    }
}
