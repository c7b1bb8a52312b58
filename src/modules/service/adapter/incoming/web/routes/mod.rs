mod archive_service;
mod create_service;
mod get_service;
pub mod list_services;
mod toggle_service;
mod update_service;

pub use archive_service::{
    delete_service_handler, force_delete_service_handler, restore_service_handler,
};
pub use create_service::create_service_handler;
pub use get_service::get_service_handler;
pub use list_services::{list_public_services_handler, list_services_handler, ListServicesQuery};
pub use toggle_service::toggle_service_handler;
pub use update_service::update_service_handler;
