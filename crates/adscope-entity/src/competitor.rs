//! Competitor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tracked competitor, identified by its Ad Library URL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Competitor {
    /// Unique competitor identifier.
    pub id: Uuid,
    /// Owning brand.
    pub brand_id: Uuid,
    /// Competitor name.
    pub name: String,
    /// Ad Library URL the ads are scraped from.
    pub ad_library_url: String,
    /// Page ID extracted from the library URL.
    pub page_id: Option<String>,
    /// Whether the competitor is actively tracked.
    pub is_active: bool,
    /// When ads were last fetched for this competitor.
    pub last_fetched: Option<DateTime<Utc>>,
    /// When the competitor was created.
    pub created_at: DateTime<Utc>,
    /// When the competitor was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new competitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompetitor {
    /// Owning brand.
    pub brand_id: Uuid,
    /// Competitor name.
    pub name: String,
    /// Ad Library URL.
    pub ad_library_url: String,
    /// Page ID extracted from the URL at validation time.
    pub page_id: Option<String>,
}
