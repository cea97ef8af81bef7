//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AdService**: Ad creation, paginated listing, and fetch-by-id

pub mod ad_service;

// Re-export ad service types
pub use ad_service::{AdError, AdService, AdServiceImpl};
