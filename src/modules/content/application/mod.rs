pub mod content_use_cases;
pub mod domain;
pub mod ports;
pub mod use_cases;
