//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::SortOrder;

/// Maximum number of significant digits in a price.
const PRICE_MAX_DIGITS: usize = 9;

/// Maximum number of decimal places in a price.
const PRICE_MAX_SCALE: u32 = 2;

/// Create ad request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdRequest {
    #[validate(length(min = 5, max = 200, message = "Name must be 5-200 characters"))]
    pub name: String,

    #[validate(length(min = 10, max = 1000, message = "Description must be 10-1000 characters"))]
    pub description: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    #[validate(
        length(min = 1, max = 3, message = "An ad must have 1-3 photos"),
        nested
    )]
    pub photos: Vec<PhotoRequest>,
}

/// Photo entry inside a create request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PhotoRequest {
    #[validate(url(message = "Photo url must be an absolute URL"))]
    pub url: String,
}

/// Price must be at least 1.00 and fit NUMERIC(9,2): at most 9 significant
/// digits with at most 2 decimal places.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ONE {
        let mut err = ValidationError::new("price_min");
        err.message = Some("Price must be at least 1.00".into());
        return Err(err);
    }

    if price.scale() > PRICE_MAX_SCALE {
        let mut err = ValidationError::new("price_scale");
        err.message = Some("Price must have at most 2 decimal places".into());
        return Err(err);
    }

    let digits = price.mantissa().unsigned_abs().to_string().len();
    if digits > PRICE_MAX_DIGITS {
        let mut err = ValidationError::new("price_digits");
        err.message = Some("Price must have at most 9 digits".into());
        return Err(err);
    }

    Ok(())
}

/// Query parameters for the ad listing endpoint.
///
/// Both sort keys are independent and optional; an omitted key takes no
/// part in the ordering at all.
#[derive(Debug, Deserialize)]
pub struct ListAdsParams {
    pub date_order: Option<SortOrder>,
    pub price_order: Option<SortOrder>,
    pub page: Option<i64>,
}

/// Extra fields that may be requested on the single-ad endpoint.
///
/// Unknown values are a deserialization error, surfaced to the client as a
/// validation failure rather than being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraField {
    Description,
    Photos,
}

/// Query parameters for the single-ad endpoint.
#[derive(Debug, Deserialize)]
pub struct GetAdParams {
    #[serde(default)]
    pub fields: Vec<ExtraField>,
}
