//! Ad entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One scraped advertisement.
///
/// Uniqueness is `(competitor_id, ad_library_id)`; re-fetching the same
/// external ad updates the row in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ad {
    /// Unique ad identifier.
    pub id: Uuid,
    /// Owning competitor.
    pub competitor_id: Uuid,
    /// External identifier assigned by the ad library.
    pub ad_library_id: String,
    /// Primary ad text.
    pub ad_copy: Option<String>,
    /// Headline.
    pub headline: Option<String>,
    /// Call to action.
    pub cta: Option<String>,
    /// Media URL.
    pub media_url: Option<String>,
    /// Media type: `"image"`, `"video"`, or `"unknown"`.
    pub media_type: Option<String>,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Landing page URL.
    pub landing_page: Option<String>,
    /// Impression range reported by the source.
    pub impression_range: Option<String>,
    /// Delivery start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Delivery status: `"active"` or `"inactive"`.
    pub status: String,
    /// When the ad row was created.
    pub created_at: DateTime<Utc>,
    /// When the ad row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload for an ad, keyed by `(competitor_id, ad_library_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertAd {
    /// Owning competitor.
    pub competitor_id: Uuid,
    /// External identifier assigned by the ad library.
    pub ad_library_id: String,
    /// Primary ad text.
    pub ad_copy: Option<String>,
    /// Headline.
    pub headline: Option<String>,
    /// Call to action.
    pub cta: Option<String>,
    /// Media URL.
    pub media_url: Option<String>,
    /// Media type.
    pub media_type: Option<String>,
    /// Thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Landing page URL.
    pub landing_page: Option<String>,
    /// Impression range.
    pub impression_range: Option<String>,
    /// Delivery start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Delivery status.
    pub status: String,
}
