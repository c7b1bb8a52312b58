pub mod portfolio_data;
pub mod service_detail;

pub use portfolio_data::{PersonalInfo, PortfolioData, ProjectSummary};
pub use service_detail::ServiceDetail;
