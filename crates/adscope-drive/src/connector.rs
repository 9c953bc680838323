//! Factory producing Drive clients from stored refresh tokens.

use std::sync::Arc;

use adscope_core::config::DriveConfig;
use adscope_core::traits::{DriveClient, DriveConnector};

use crate::client::GoogleDriveClient;
use crate::oauth::DriveOAuth;

/// [`DriveConnector`] for the real Google Drive API.
#[derive(Debug, Clone)]
pub struct GoogleDriveConnector {
    oauth: DriveOAuth,
}

impl GoogleDriveConnector {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            oauth: DriveOAuth::new(config),
        }
    }

    /// The OAuth helper, shared with the HTTP consent handlers.
    pub fn oauth(&self) -> &DriveOAuth {
        &self.oauth
    }
}

impl DriveConnector for GoogleDriveConnector {
    fn connect(&self, refresh_token: &str) -> Arc<dyn DriveClient> {
        Arc::new(GoogleDriveClient::new(
            self.oauth.clone(),
            refresh_token.to_string(),
        ))
    }
}
