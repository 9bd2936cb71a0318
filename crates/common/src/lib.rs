pub mod types;
pub mod utils;

/// Body returned by the plaintext and json benchmark endpoints.
pub const HELLO_WORLD: &str = "Hello, World!";
