pub mod get_portfolio;
pub mod get_service_detail;
