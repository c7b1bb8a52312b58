pub mod project_service;
pub mod project_skill;
pub mod projects;
