//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use adscope_core::config::AppConfig;
use adscope_database::repositories::{
    AdRepository, AnalysisRepository, BrandRepository, CompetitorRepository, JobRepository,
    SettingsRepository,
};
use adscope_drive::DriveOAuth;
use adscope_worker::{JobDispatcher, JobProcessor, TaskContext};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields clone
/// cheaply (pools and `Arc`s).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Brand repository.
    pub brands: BrandRepository,
    /// Competitor repository.
    pub competitors: CompetitorRepository,
    /// Ad repository.
    pub ads: AdRepository,
    /// Analysis repository.
    pub analyses: AnalysisRepository,
    /// Settings repository.
    pub settings: SettingsRepository,
    /// Job repository.
    pub jobs: JobRepository,

    /// Job enqueuing.
    pub dispatcher: JobDispatcher,
    /// Job draining.
    pub processor: JobProcessor,
    /// Task implementations, for the synchronous API paths.
    pub tasks: TaskContext,
    /// OAuth helper for the Drive consent flow.
    pub drive_oauth: DriveOAuth,
}
