//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateAdRequest, ExtraField, GetAdParams, ListAdsParams, PhotoRequest};
pub use response::{AdCreatedResponse, AdDetailResponse, AdShortResponse, PhotoResponse};
