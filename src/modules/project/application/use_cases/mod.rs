pub mod archive_project;
pub mod create_project;
pub mod get_project;
pub mod list_project_categories;
pub mod list_projects;
pub mod list_public_projects;
pub mod project_command;
pub mod project_links;
pub mod toggle_project;
pub mod update_project;
pub mod upload_thumbnail;
