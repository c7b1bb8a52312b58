pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_updated_at_function;
mod m20250801_000002_create_portfolio_content_table;
mod m20250801_000003_create_services_table;
mod m20250801_000004_create_projects_table;
mod m20250801_000005_create_skills_table;
mod m20250801_000006_create_statistics_table;
mod m20250801_000007_create_project_pivot_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_updated_at_function::Migration),
            Box::new(m20250801_000002_create_portfolio_content_table::Migration),
            Box::new(m20250801_000003_create_services_table::Migration),
            Box::new(m20250801_000004_create_projects_table::Migration),
            Box::new(m20250801_000005_create_skills_table::Migration),
            Box::new(m20250801_000006_create_statistics_table::Migration),
            Box::new(m20250801_000007_create_project_pivot_tables::Migration),
        ]
    }
}
