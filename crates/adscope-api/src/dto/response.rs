//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adscope_entity::job::ProcessedJob;

/// Body returned with 202 when work is enqueued instead of run inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQueuedResponse {
    /// The queued job's ID, for polling `GET /api/jobs/:id`.
    pub job_id: Uuid,
}

/// Outcome of one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessJobsResponse {
    /// Number of jobs this invocation claimed and finalized.
    pub processed: usize,
    /// Per-job outcomes.
    pub results: Vec<ProcessedJob>,
}

/// Drive connection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveStatusResponse {
    pub connected: bool,
}

/// Drive consent URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the database answered the ping.
    pub database: bool,
}
