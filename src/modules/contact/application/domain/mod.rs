mod contact_form;
mod message_view;

pub use contact_form::{ContactForm, ContactInput};
pub use message_view::{MessageDetail, MessageSummary, PREVIEW_LENGTH};
