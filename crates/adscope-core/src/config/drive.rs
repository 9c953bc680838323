//! Google Drive archival configuration.

use serde::{Deserialize, Serialize};

/// Google Drive OAuth2 configuration.
///
/// The refresh token itself is stored in the `settings` table once the
/// operator completes the consent flow; this section only carries the
/// OAuth client identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// OAuth2 client ID.
    #[serde(default)]
    pub client_id: String,
    /// OAuth2 client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Redirect URI registered for the OAuth client.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    /// Name of the root archive folder in Drive.
    #[serde(default = "default_root_folder")]
    pub root_folder: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: default_redirect_uri(),
            root_folder: default_root_folder(),
        }
    }
}

fn default_redirect_uri() -> String {
    "http://localhost:8080/api/drive/callback".to_string()
}

fn default_root_folder() -> String {
    "Competitor Ads".to_string()
}
