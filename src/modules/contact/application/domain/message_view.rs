use serde::Serialize;

use crate::modules::content::application::domain::ContactMessage;
use crate::shared::text::truncate;

/// Characters of the message body shown in the admin inbox.
pub const PREVIEW_LENGTH: usize = 100;

/// Row of the admin inbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: String,
    pub preview: String,
}

impl From<ContactMessage> for MessageSummary {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.display_name().to_string(),
            email: message.display_email().to_string(),
            preview: truncate(&message.content, PREVIEW_LENGTH),
            created_at: message.received_at_display(),
            content: message.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDetail {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub content: String,
    pub created_at: String,
}

impl From<ContactMessage> for MessageDetail {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.display_name().to_string(),
            email: message.display_email().to_string(),
            created_at: message.received_at_display(),
            phone: message.phone,
            subject: message.subject,
            content: message.content,
        }
    }
}
