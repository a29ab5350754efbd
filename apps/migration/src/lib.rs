//! Migrator for the posts schema, in dependency order.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_posts;
mod m20240301_000002_create_hash_tags;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_posts::Migration),
            Box::new(m20240301_000002_create_hash_tags::Migration),
        ]
    }
}
