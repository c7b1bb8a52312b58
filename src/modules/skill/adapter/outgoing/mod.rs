pub mod sea_orm_entity;
mod skill_query_postgres;

pub use skill_query_postgres::SkillQueryPostgres;
