//! Presentation Layer
//!
//! HTTP routes and handlers.

pub mod http;
pub mod middleware;
