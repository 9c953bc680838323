//! Brand entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A brand whose competitors are being tracked.
///
/// Brand context fields feed the repurposing section of every analysis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: Uuid,
    /// Brand name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Target audience description.
    pub target_audience: Option<String>,
    /// Tone of voice.
    pub tone_of_voice: Option<String>,
    /// Product information.
    pub product_info: Option<String>,
    /// Industry.
    pub industry: Option<String>,
    /// When the brand was created.
    pub created_at: DateTime<Utc>,
    /// When the brand was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBrand {
    /// Brand name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Target audience description.
    pub target_audience: Option<String>,
    /// Tone of voice.
    pub tone_of_voice: Option<String>,
    /// Product information.
    pub product_info: Option<String>,
    /// Industry.
    pub industry: Option<String>,
}

/// Partial brand update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub tone_of_voice: Option<String>,
    pub product_info: Option<String>,
    pub industry: Option<String>,
}
