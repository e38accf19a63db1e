pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_skills_table;
mod m20250301_000002_create_projects_table;
mod m20250301_000003_create_experience_table;
mod m20250301_000004_create_education_table;
mod m20250301_000005_create_contact_and_about_tables;
mod m20250302_000001_add_ordering_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_skills_table::Migration),
            Box::new(m20250301_000002_create_projects_table::Migration),
            Box::new(m20250301_000003_create_experience_table::Migration),
            Box::new(m20250301_000004_create_education_table::Migration),
            Box::new(m20250301_000005_create_contact_and_about_tables::Migration),
            Box::new(m20250302_000001_add_ordering_indexes::Migration),
        ]
    }
}
