pub mod api;
pub mod i18n;
pub mod json;
pub mod page;
pub mod pagination;
pub mod text;
pub mod validation;
