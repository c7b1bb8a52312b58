pub mod service_archiver;
pub mod service_query;
pub mod service_repository;

pub use service_archiver::{ServiceArchiver, ServiceArchiverError};
pub use service_query::{ServiceListFilter, ServiceQuery, ServiceQueryError};
pub use service_repository::{ServiceData, ServiceRepository, ServiceRepositoryError};
