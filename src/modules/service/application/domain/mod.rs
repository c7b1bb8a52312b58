pub mod entities;

pub use entities::{ServiceRecord, ServiceView};
