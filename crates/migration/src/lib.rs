//! Migrator for the benchmark schema.
//! Seed data is applied after both tables exist.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_fortune;
mod m20240101_000002_create_world;
mod m20240101_000003_seed_benchmark_data;

pub use m20240101_000003_seed_benchmark_data::{FORTUNES, WORLD_ROWS};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_fortune::Migration),
            Box::new(m20240101_000002_create_world::Migration),
            Box::new(m20240101_000003_seed_benchmark_data::Migration),
        ]
    }
}
