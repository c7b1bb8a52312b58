pub mod contact_use_cases;
pub mod domain;
pub mod use_cases;
