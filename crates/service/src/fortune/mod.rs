//! Fortune listing: domain, repository, cache and service layers.

pub mod cache;
pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::FortuneService;
