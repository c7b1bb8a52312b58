mod mapping;
mod service_archiver_postgres;
mod service_query_postgres;
mod service_repository_postgres;
pub mod sea_orm_entity;

pub use service_archiver_postgres::ServiceArchiverPostgres;
pub use service_query_postgres::ServiceQueryPostgres;
pub use service_repository_postgres::ServiceRepositoryPostgres;
