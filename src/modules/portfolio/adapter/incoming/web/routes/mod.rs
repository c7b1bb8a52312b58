mod language;
mod pages;
mod service_detail;

pub use language::switch_language_handler;
pub use pages::{
    about_page_handler, contact_page_handler, home_page_handler, projects_page_handler,
    skills_page_handler,
};
pub use service_detail::{service_detail_handler, ServiceDetailPage};
