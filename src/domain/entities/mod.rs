//! # Domain Entities
//!
//! Core domain entities for the ad service. Both entities map directly to
//! their corresponding database tables.
//!
//! - **Ad**: a classified listing with name, description, price, and a
//!   server-assigned creation date
//! - **Photo**: an image attached to an ad; the first photo in insertion
//!   order is the ad's main photo
//!
//! The `AdRepository` trait defines the data access contract and is
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod ad;
mod photo;

pub use ad::{Ad, AdListQuery, AdRepository, NewAd, SortOrder, PAGE_SIZE};
pub use photo::{NewPhoto, Photo};

#[cfg(test)]
pub use ad::MockAdRepository;
