//! Ad Library collaborator trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// One ad record as returned by the Ad Library source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedAd {
    /// External identifier assigned by the ad library.
    pub ad_library_id: String,
    /// Primary ad text.
    pub ad_copy: Option<String>,
    /// Link title / headline.
    pub headline: Option<String>,
    /// Call-to-action text.
    pub cta: Option<String>,
    /// Media URL (video or image).
    pub media_url: Option<String>,
    /// Media type: `"image"`, `"video"`, or `"unknown"`.
    pub media_type: Option<String>,
    /// Thumbnail / snapshot URL.
    pub thumbnail_url: Option<String>,
    /// Landing page URL.
    pub landing_page: Option<String>,
    /// Impression range as reported by the source (e.g. `"1M-5M"`).
    pub impression_range: Option<String>,
    /// Delivery start date (RFC 3339).
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Delivery status: `"active"` or `"inactive"`.
    pub status: String,
}

/// Result of one scrape call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeOutcome {
    /// Ads returned by the source.
    pub ads: Vec<ScrapedAd>,
    /// Page ID extracted from the library URL, when present.
    pub page_id: Option<String>,
}

/// Trait for ad-library sources.
///
/// Implemented by the Graph API client and the deterministic mock in
/// `adscope-scraper`. Failures carry the source's message verbatim so it
/// can be surfaced on the failing job.
#[async_trait]
pub trait AdLibraryClient: Send + Sync + std::fmt::Debug {
    /// Fetch up to `limit` ads for the given ad-library URL.
    async fn fetch_ads(&self, ad_library_url: &str, limit: usize) -> AppResult<ScrapeOutcome>;
}
