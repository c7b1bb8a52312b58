use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::contact::application::domain::{ContactForm, ContactInput};
use crate::modules::contact::application::use_cases::submit_contact::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::shared::i18n::{translate, Locale};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContactAcknowledgement {
    pub message: String,
}

#[post("/contact")]
pub async fn submit_contact_handler(
    locale: Locale,
    req: web::Json<ContactInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match ContactForm::new(req.into_inner()) {
        Ok(form) => form,
        Err(errors) => return ApiResponse::validation_error(errors),
    };

    match data.contact.submit.execute(form).await {
        Ok(()) => ApiResponse::success(ContactAcknowledgement {
            message: translate(locale, "message_sent"),
        }),
        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
