mod create_content;
mod delete_content;
mod get_content;
mod list_content;
mod update_content;

pub use create_content::create_content_handler;
pub use delete_content::delete_content_handler;
pub use get_content::get_content_handler;
pub use list_content::{list_content_handler, list_content_types_handler, ListContentQuery};
pub use update_content::update_content_handler;
