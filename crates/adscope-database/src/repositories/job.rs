//! Job repository implementation.
//!
//! The conditional claim update is the only concurrency primitive in the
//! whole queue: correctness under concurrent processors rests entirely on
//! PostgreSQL honoring the compare-and-swap semantics of
//! `UPDATE ... WHERE status = 'pending'`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::job::{Job, JobType};

/// Repository for background job persistence and queue operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Create a new pending job.
    pub async fn create(
        &self,
        job_type: JobType,
        payload: &serde_json::Value,
        run_at: DateTime<Utc>,
    ) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (job_type, payload, run_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(job_type)
        .bind(payload)
        .bind(run_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Select up to `limit` due pending jobs, oldest created first.
    ///
    /// Selection does not claim: between this query and [`claim`] another
    /// processor may take any of the returned jobs.
    ///
    /// [`claim`]: JobRepository::claim
    pub async fn find_due(&self, limit: i64) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE status = 'pending' AND run_at <= NOW() \
             ORDER BY created_at ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to select due jobs", e))
    }

    /// Atomically claim a job: pending → running, attempts + 1.
    ///
    /// Returns `false` when zero rows were affected, meaning another
    /// claimant won the race (or the job left `pending` between selection
    /// and claim); the caller skips such jobs silently.
    pub async fn claim(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE jobs SET status = 'running', attempts = attempts + 1 \
             WHERE id = $1 AND status = 'pending'",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim job", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Finalize a job as completed; clears any previous error.
    pub async fn mark_completed(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE jobs SET status = 'completed', completed_at = NOW(), last_error = NULL \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete job", e))?;
        Ok(())
    }

    /// Finalize a job as failed with the failure message.
    pub async fn mark_failed(&self, id: Uuid, error_message: &str) -> AppResult<()> {
        sqlx::query("UPDATE jobs SET status = 'failed', last_error = $2 WHERE id = $1")
            .bind(id)
            .bind(error_message)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark job as failed", e)
            })?;
        Ok(())
    }
}
