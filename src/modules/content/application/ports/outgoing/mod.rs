pub mod content_query;
pub mod content_repository;

pub use content_query::{ContentListFilter, ContentQuery, ContentQueryError, ContentSort};
pub use content_repository::{ContentData, ContentRepository, ContentRepositoryError};
