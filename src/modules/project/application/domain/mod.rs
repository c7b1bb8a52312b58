pub mod entities;

pub use entities::{ProjectCard, ProjectCategory, ProjectRecord, UnknownCategory, UrlType};
