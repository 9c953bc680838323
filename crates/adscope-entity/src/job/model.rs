//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{JobStatus, JobType};

/// A durable record of deferred work.
///
/// The payload is immutable after creation; only `status`, `attempts`,
/// `last_error`, and `completed_at` mutate, and all mutation goes through
/// the claim/finalize operations on the job repository.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Kind of work.
    pub job_type: JobType,
    /// Type-specific payload (JSON, camelCase keys).
    pub payload: serde_json::Value,
    /// Current status.
    pub status: JobStatus,
    /// Earliest time the job is eligible for execution.
    pub run_at: DateTime<Utc>,
    /// Number of claims made on this job. Incremented at claim time, so a
    /// crash mid-execution still shows the attempt was made.
    pub attempts: i32,
    /// Last failure message; cleared on success.
    pub last_error: Option<String>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job reached `completed`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-job outcome returned by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedJob {
    /// Job identifier.
    pub id: Uuid,
    /// Terminal status reached in this invocation.
    pub status: JobStatus,
}
