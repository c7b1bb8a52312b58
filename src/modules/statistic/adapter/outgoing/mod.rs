pub mod sea_orm_entity;
mod statistic_query_postgres;

pub use statistic_query_postgres::StatisticQueryPostgres;
