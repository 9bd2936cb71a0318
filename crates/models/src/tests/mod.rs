/// Queries against the seeded benchmark tables
pub mod benchmark_tables_tests;
