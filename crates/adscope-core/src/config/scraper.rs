//! Ad Library scraper configuration.

use serde::{Deserialize, Serialize};

/// Meta Ad Library API configuration.
///
/// When no access token is configured the scraper falls back to the
/// deterministic mock source, which keeps the rest of the pipeline
/// exercisable without API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Graph API access token. Absent = mock mode.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Graph API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Force mock mode even when a token is present.
    #[serde(default)]
    pub use_mock: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_version: default_api_version(),
            use_mock: false,
        }
    }
}

fn default_api_version() -> String {
    "v18.0".to_string()
}
