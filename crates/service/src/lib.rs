//! Service layer providing the benchmark operations on top of models.
//! - Separates business logic from data access.
//! - Repository traits have SeaORM and in-memory implementations.

pub mod errors;
pub mod fortune;
pub mod world;
#[cfg(test)]
pub mod test_support;

pub use fortune::FortuneService;
pub use world::WorldService;
