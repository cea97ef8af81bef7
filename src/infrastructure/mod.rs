//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database repositories (PostgreSQL)

pub mod database;
pub mod repositories;
