//! Cloud storage (Google Drive) collaborator traits.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// An uploaded Drive file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFile {
    /// Drive file ID.
    pub id: String,
    /// Browser link to the file.
    pub web_view_link: String,
}

/// A Drive client bound to one set of credentials.
#[async_trait]
pub trait DriveClient: Send + Sync + std::fmt::Debug {
    /// Upload a file, optionally into a parent folder.
    async fn upload_file(
        &self,
        name: &str,
        content: &[u8],
        mime_type: &str,
        parent_id: Option<&str>,
    ) -> AppResult<DriveFile>;

    /// Find a folder by name under the given parent, creating it if absent.
    async fn get_or_create_folder(&self, name: &str, parent_id: Option<&str>)
        -> AppResult<String>;
}

/// Factory producing a [`DriveClient`] from a stored refresh token.
///
/// The token lives in the settings table and is only present after the
/// operator completes the OAuth consent flow, so clients are constructed
/// per task run rather than at startup.
pub trait DriveConnector: Send + Sync + std::fmt::Debug {
    /// Build a client authorized by the given refresh token.
    fn connect(&self, refresh_token: &str) -> Arc<dyn DriveClient>;
}
