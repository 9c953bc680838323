//! Google Drive archival over the Drive v3 REST API.
//!
//! Authorization uses the standard OAuth2 authorization-code flow with
//! offline access. Only the `drive.file` scope is requested, so the app
//! sees nothing but the files it created itself.

pub mod client;
pub mod connector;
pub mod oauth;

pub use client::GoogleDriveClient;
pub use connector::GoogleDriveConnector;
pub use oauth::DriveOAuth;
