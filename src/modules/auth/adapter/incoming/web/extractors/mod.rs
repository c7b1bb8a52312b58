mod admin;

pub use admin::AdminUser;
