//! REST API endpoint tests

mod ad_tests;
mod health_tests;
