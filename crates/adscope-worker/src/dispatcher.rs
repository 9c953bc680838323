//! Job enqueuing.

use chrono::{DateTime, Utc};

use adscope_core::result::AppResult;
use adscope_database::repositories::JobRepository;
use adscope_entity::job::{Job, JobPayload};

/// Enqueues typed jobs into the durable queue.
///
/// All enqueuing goes through [`JobPayload`], so the stored JSON always
/// matches the job type it is stored with.
#[derive(Debug, Clone)]
pub struct JobDispatcher {
    jobs: JobRepository,
}

impl JobDispatcher {
    pub fn new(jobs: JobRepository) -> Self {
        Self { jobs }
    }

    /// Enqueue a job, due immediately unless `run_at` defers it.
    pub async fn enqueue(
        &self,
        payload: JobPayload,
        run_at: Option<DateTime<Utc>>,
    ) -> AppResult<Job> {
        let value = payload.to_value()?;
        let job = self
            .jobs
            .create(payload.job_type(), &value, run_at.unwrap_or_else(Utc::now))
            .await?;
        tracing::info!(job_id = %job.id, job_type = %job.job_type, "job enqueued");
        Ok(job)
    }
}
