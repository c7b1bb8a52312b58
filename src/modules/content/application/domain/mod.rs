pub mod entities;
pub mod portfolio_entry;

pub use entities::{ContentRecord, ContentType, UnknownContentType};
pub use portfolio_entry::{
    BlogPost, ContactMessage, ContentDetail, PersonalProfile, PortfolioEntry, Section,
    Testimonial,
};
