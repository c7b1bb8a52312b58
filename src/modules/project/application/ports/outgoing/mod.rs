pub mod project_archiver;
pub mod project_query;
pub mod project_repository;

pub use project_archiver::{ProjectArchiver, ProjectArchiverError};
pub use project_query::{ProjectLinks, ProjectListFilter, ProjectQuery, ProjectQueryError};
pub use project_repository::{LinkUpdate, ProjectData, ProjectRepository, ProjectRepositoryError};
