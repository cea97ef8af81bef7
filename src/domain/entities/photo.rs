//! Photo entity.
//!
//! Maps to the `photo` table. A photo belongs to exactly one ad; deleting
//! an ad cascades to its photos at the schema level.

use serde::{Deserialize, Serialize};

/// A photo attached to an ad.
///
/// Maps to the `photo` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - url: VARCHAR(512) NOT NULL
/// - ad_id: BIGINT NOT NULL REFERENCES ad(id) ON DELETE CASCADE
///
/// Insertion order is ascending `id`; the first photo of an ad is its
/// main photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,

    /// Absolute URL of the image
    pub url: String,

    /// Owning ad
    pub ad_id: i64,
}

/// Data for a photo on a not-yet-persisted ad.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub url: String,
}
