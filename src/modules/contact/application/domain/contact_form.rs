use email_address::EmailAddress;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;

use crate::modules::content::application::domain::ContentType;
use crate::modules::content::application::ports::outgoing::ContentData;
use crate::shared::validation::{optional_text, required_text, ValidationErrors};

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s\-'.]+$").expect("valid name pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone pattern"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    phone: Option<String>,
    subject: Option<String>,
}

impl ContactForm {
    pub fn new(input: ContactInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", &input.name, 2, 255);
        if !name.is_empty() && !NAME.is_match(&name) {
            errors.add(
                "name",
                "The name may only contain letters, spaces, hyphens, apostrophes and periods.",
            );
        }

        let email = required_text(&mut errors, "email", &input.email, 1, 255);
        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            errors.add("email", "The email must be a valid email address.");
        }

        let message = required_text(&mut errors, "message", &input.message, 10, 1000);

        let phone = optional_text(&mut errors, "phone", input.phone.as_deref(), 1, 17);
        if let Some(phone) = phone.as_deref() {
            if !PHONE.is_match(phone) {
                errors.add("phone", "The phone format is invalid.");
            }
        }

        let subject = optional_text(&mut errors, "subject", input.subject.as_deref(), 1, 255);

        errors.finish(Self {
            name,
            email,
            message,
            phone,
            subject,
        })
    }

    /// Stored as a `contact_message` content row under a unique key.
    pub fn into_content_data(self) -> ContentData {
        let mut metadata = json!({ "email": self.email });
        if let Some(phone) = self.phone {
            metadata["phone"] = json!(phone);
        }

        ContentData {
            key: format!("contact-message-{}", uuid::Uuid::new_v4()),
            content_type: ContentType::ContactMessage,
            category: None,
            title_en: Some(self.name),
            title_ar: None,
            subtitle_en: self.subject,
            subtitle_ar: None,
            description_en: None,
            description_ar: None,
            content_en: Some(self.message),
            content_ar: None,
            metadata_en: Some(metadata),
            metadata_ar: None,
            is_active: true,
            sort_order: 0,
        }
    }
}
