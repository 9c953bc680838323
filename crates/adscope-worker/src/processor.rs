//! The job processor: claim, execute, finalize.

use adscope_core::config::JobsConfig;
use adscope_core::result::AppResult;
use adscope_database::repositories::JobRepository;
use adscope_entity::job::{Job, JobPayload, JobStatus, ProcessedJob};

use crate::tasks::TaskContext;

/// Drains due jobs from the queue.
///
/// Safe to invoke concurrently: every job is claimed with a conditional
/// update before execution, so overlapping cron triggers never run the
/// same job twice.
#[derive(Debug, Clone)]
pub struct JobProcessor {
    jobs: JobRepository,
    tasks: TaskContext,
    config: JobsConfig,
}

/// Resolve the number of jobs one invocation may claim.
fn effective_limit(requested: Option<usize>, config: &JobsConfig) -> usize {
    requested
        .unwrap_or(config.default_batch_size)
        .clamp(1, config.max_batch_size)
}

impl JobProcessor {
    pub fn new(jobs: JobRepository, tasks: TaskContext, config: JobsConfig) -> Self {
        Self {
            jobs,
            tasks,
            config,
        }
    }

    /// Process up to `limit` due jobs, oldest first.
    ///
    /// Jobs lost to a concurrent claimant are skipped and do not appear in
    /// the returned outcomes. A job failure is recorded on the job and the
    /// run continues with the next one.
    pub async fn process_jobs(&self, limit: Option<usize>) -> AppResult<Vec<ProcessedJob>> {
        let limit = effective_limit(limit, &self.config);
        let due = self.jobs.find_due(limit as i64).await?;

        let mut outcomes = Vec::with_capacity(due.len());
        for job in due {
            if !self.jobs.claim(job.id).await? {
                continue;
            }

            tracing::info!(
                job_id = %job.id,
                job_type = %job.job_type,
                attempt = job.attempts + 1,
                "processing job"
            );

            match self.execute(&job).await {
                Ok(()) => {
                    self.jobs.mark_completed(job.id).await?;
                    tracing::info!(job_id = %job.id, "job completed");
                    outcomes.push(ProcessedJob {
                        id: job.id,
                        status: JobStatus::Completed,
                    });
                }
                Err(e) => {
                    tracing::warn!(job_id = %job.id, error = %e, "job failed");
                    self.jobs.mark_failed(job.id, &e.message).await?;
                    outcomes.push(ProcessedJob {
                        id: job.id,
                        status: JobStatus::Failed,
                    });
                }
            }
        }

        Ok(outcomes)
    }

    /// Decode the payload and run the matching task.
    ///
    /// A payload that does not match its job type fails here, which fails
    /// the job rather than the processing run.
    async fn execute(&self, job: &Job) -> AppResult<()> {
        match JobPayload::from_parts(job.job_type, &job.payload)? {
            JobPayload::FetchCompetitorAds(payload) => {
                self.tasks
                    .fetch_competitor_ads(payload.competitor_id, payload.limit)
                    .await?;
            }
            JobPayload::AnalyzeCompetitorAds(payload) => {
                self.tasks
                    .analyze_batch(payload.competitor_id, payload.ad_ids.as_deref())
                    .await?;
            }
            JobPayload::AnalyzeAd(payload) => {
                self.tasks.analyze_ad(payload.ad_id).await?;
            }
        }
        Ok(())
    }
}
