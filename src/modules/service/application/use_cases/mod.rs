pub mod archive_service;
pub mod create_service;
pub mod get_service;
pub mod list_public_services;
pub mod list_services;
pub mod service_command;
pub mod toggle_service;
pub mod update_service;
