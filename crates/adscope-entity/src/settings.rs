//! Application settings entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Singleton settings row (`id = 'default'`).
///
/// Drive is considered connected when `google_refresh_token` is present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Settings {
    /// Fixed row identifier.
    pub id: String,
    /// Google OAuth2 refresh token, set by the Drive consent callback.
    pub google_refresh_token: Option<String>,
    /// When the settings row was last updated.
    pub updated_at: DateTime<Utc>,
}
