pub use sea_orm_migration::prelude::*;

mod m20260807_000000_create_tasks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260807_000000_create_tasks::Migration)]
    }
}
