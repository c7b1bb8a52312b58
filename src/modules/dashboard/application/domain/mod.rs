pub mod summary;

pub use summary::{DashboardStats, DashboardSummary, RecentMessage, RecentProject};
