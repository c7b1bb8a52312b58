pub mod auth;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod media;
pub mod portfolio;
pub mod project;
pub mod service;
pub mod skill;
pub mod statistic;
