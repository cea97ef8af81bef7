//! Ad entity and repository trait.
//!
//! Maps to the `ad` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

use super::photo::{NewPhoto, Photo};

/// Fixed number of ads per listing page.
pub const PAGE_SIZE: i64 = 10;

/// Sort direction for listing queries.
///
/// Serialized as the `asc`/`desc` query-string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Parameters for a paginated listing query.
///
/// Sort keys have fixed precedence (date before price) but each is applied
/// only when present; an absent key is omitted from the ordering entirely.
#[derive(Debug, Clone)]
pub struct AdListQuery {
    pub date_order: Option<SortOrder>,
    pub price_order: Option<SortOrder>,
    /// 1-indexed page number. Must be >= 1; the service rejects anything else.
    pub page: i64,
}

impl AdListQuery {
    /// Row offset for this page.
    ///
    /// Saturates for absurdly large page numbers; any page past the end of
    /// the collection yields an empty result rather than an error.
    pub fn offset(&self) -> i64 {
        PAGE_SIZE.saturating_mul(self.page.saturating_sub(1))
    }
}

/// Represents a stored classified ad.
///
/// Maps to the `ad` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(200) NOT NULL
/// - description: VARCHAR(1000) NOT NULL
/// - price: NUMERIC(9,2) NOT NULL
/// - date: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Photos are loaded alongside the ad, in insertion order. Every ad is
/// created with 1-3 photos; the first one is the main photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: i64,

    /// Ad title (5-200 characters)
    pub name: String,

    /// Ad body text (10-1000 characters)
    pub description: String,

    /// Price in major currency units, at most 9 digits with 2 decimal places
    pub price: Decimal,

    /// Creation timestamp, assigned by the store at insert time
    pub date: DateTime<Utc>,

    /// Photos in insertion order
    pub photos: Vec<Photo>,
}

impl Ad {
    /// First photo in insertion order.
    pub fn main_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }
}

/// Data for a new ad, already validated at the API boundary.
#[derive(Debug, Clone)]
pub struct NewAd {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub photos: Vec<NewPhoto>,
}

/// Repository trait for ad data access.
///
/// Implemented by the infrastructure layer (PostgreSQL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Insert an ad and its photos atomically, returning the assigned id.
    async fn insert(&self, ad: &NewAd) -> Result<i64, AppError>;

    /// Find an ad (with photos) by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError>;

    /// Fetch one page of ads for the given listing query.
    ///
    /// Only ads with at least one photo are returned. A page past the end
    /// of the collection yields an empty vector.
    async fn list(&self, query: &AdListQuery) -> Result<Vec<Ad>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_for_first_page() {
        let query = AdListQuery {
            date_order: None,
            price_order: None,
            page: 1,
        };
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn offset_skips_full_pages() {
        let query = AdListQuery {
            date_order: None,
            price_order: None,
            page: 3,
        };
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let query = AdListQuery {
            date_order: None,
            price_order: None,
            page: i64::MAX,
        };
        assert_eq!(query.offset(), i64::MAX);
    }

    #[test]
    fn sort_order_sql_keywords() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }
}
