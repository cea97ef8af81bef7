//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.

pub mod ad_repository;

pub use ad_repository::PgAdRepository;
