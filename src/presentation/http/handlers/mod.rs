//! HTTP Handlers

pub mod ad;
pub mod health;
