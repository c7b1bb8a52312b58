pub mod statistic_query;

pub use statistic_query::{StatisticQuery, StatisticQueryError};
