pub mod entities;

pub use entities::{StatisticRecord, StatisticType, StatisticView};
