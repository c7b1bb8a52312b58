pub mod content_command;
pub mod create_content;
pub mod delete_content;
pub mod get_content;
pub mod list_content;
pub mod update_content;
