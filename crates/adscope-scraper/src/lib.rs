//! Meta Ad Library clients.
//!
//! Two implementations of [`AdLibraryClient`]: a Graph API client for real
//! scraping and a mock generator for environments without an access token.
//! [`from_config`] picks one based on configuration.

pub mod graph;
pub mod mock;
pub mod url;

use std::sync::Arc;

use adscope_core::config::ScraperConfig;
use adscope_core::traits::AdLibraryClient;

pub use graph::GraphApiScraper;
pub use mock::MockScraper;

/// Build the scraper the configuration calls for.
///
/// The mock is used when explicitly requested or when no access token is
/// configured, matching how a development environment runs without Meta
/// API credentials.
pub fn from_config(config: &ScraperConfig) -> Arc<dyn AdLibraryClient> {
    match &config.access_token {
        Some(token) if !config.use_mock && !token.is_empty() => Arc::new(
            GraphApiScraper::new(token.clone(), config.api_version.clone()),
        ),
        _ => {
            tracing::info!("using mock ad data (no API token configured)");
            Arc::new(MockScraper::new())
        }
    }
}
