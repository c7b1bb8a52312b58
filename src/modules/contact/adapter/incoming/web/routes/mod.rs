mod delete_message;
mod get_message;
mod list_messages;
mod submit_contact;

pub use delete_message::delete_message_handler;
pub use get_message::get_message_handler;
pub use list_messages::{list_messages_handler, ListMessagesQuery};
pub use submit_contact::{submit_contact_handler, ContactAcknowledgement};
