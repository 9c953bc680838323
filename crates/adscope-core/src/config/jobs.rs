//! Background job processing configuration.

use serde::{Deserialize, Serialize};

/// Job queue and processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Shared secret for the cron trigger endpoint. When unset the
    /// endpoint is open (development mode).
    #[serde(default)]
    pub cron_secret: Option<String>,
    /// Default number of jobs claimed per processor invocation.
    #[serde(default = "default_batch_size")]
    pub default_batch_size: usize,
    /// Hard ceiling on jobs claimed per invocation, regardless of the
    /// requested limit.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            cron_secret: None,
            default_batch_size: default_batch_size(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_batch_size() -> usize {
    5
}

fn default_max_batch_size() -> usize {
    20
}
