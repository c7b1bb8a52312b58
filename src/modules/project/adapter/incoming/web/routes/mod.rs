mod archive_project;
mod create_project;
mod get_project;
mod list_projects;
pub mod public_projects;
mod toggle_project;
mod update_project;
mod upload_thumbnail;

pub use archive_project::{
    delete_project_handler, force_delete_project_handler, restore_project_handler,
};
pub use create_project::create_project_handler;
pub use get_project::get_project_handler;
pub use list_projects::{list_project_categories_handler, list_projects_handler, ListProjectsQuery};
pub use public_projects::{
    list_featured_projects_handler, list_projects_by_category_handler,
    list_public_projects_handler, PublicProjectsQuery,
};
pub use toggle_project::{toggle_featured_handler, toggle_project_handler};
pub use update_project::update_project_handler;
pub use upload_thumbnail::upload_thumbnail_handler;
