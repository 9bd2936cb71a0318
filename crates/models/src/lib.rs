pub mod errors;
pub mod db;
pub mod fortune;
pub mod world;

#[cfg(test)]
mod tests;
