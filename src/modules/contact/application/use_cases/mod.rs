pub mod delete_message;
pub mod get_message;
pub mod list_messages;
pub mod submit_contact;
