//! Response DTOs
//!
//! Output projections of stored ads. The short view backs listing results;
//! the detail view adds opt-in fields and omits anything not requested
//! (absent, never `null`).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::dto::request::ExtraField;
use crate::domain::{Ad, Photo};
use crate::shared::error::AppError;

/// Response for a successfully created ad
#[derive(Debug, Serialize)]
pub struct AdCreatedResponse {
    pub id: i64,
}

/// A single photo in a response
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub url: String,
}

impl From<&Photo> for PhotoResponse {
    fn from(photo: &Photo) -> Self {
        Self {
            url: photo.url.clone(),
        }
    }
}

/// Short ad view used in listings
#[derive(Debug, Serialize)]
pub struct AdShortResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub main_photo: PhotoResponse,
}

impl AdShortResponse {
    /// Project an ad into its short view.
    ///
    /// Fails if the ad has no photos, which the creation invariant makes
    /// unreachable for stored data.
    pub fn project(ad: &Ad) -> Result<Self, AppError> {
        let main_photo = ad
            .main_photo()
            .map(PhotoResponse::from)
            .ok_or_else(|| AppError::Internal(format!("ad {} has no photos", ad.id)))?;

        Ok(Self {
            id: ad.id,
            name: ad.name.clone(),
            price: ad.price,
            main_photo,
        })
    }
}

/// Extended ad view for the single-ad endpoint.
///
/// `description` and `photos` are present only when explicitly requested.
#[derive(Debug, Serialize)]
pub struct AdDetailResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub main_photo: PhotoResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<PhotoResponse>>,
}

impl AdDetailResponse {
    /// Project an ad into its extended view, including only the requested
    /// extra fields.
    pub fn project(ad: &Ad, fields: &[ExtraField]) -> Result<Self, AppError> {
        let short = AdShortResponse::project(ad)?;

        let description = fields
            .contains(&ExtraField::Description)
            .then(|| ad.description.clone());
        let photos = fields
            .contains(&ExtraField::Photos)
            .then(|| ad.photos.iter().map(PhotoResponse::from).collect());

        Ok(Self {
            id: short.id,
            name: short.name,
            price: short.price,
            main_photo: short.main_photo,
            description,
            photos,
        })
    }
}
