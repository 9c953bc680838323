//! Analysis repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::analysis::{Analysis, CreateAnalysis};

/// Repository for persisted AI analyses.
#[derive(Debug, Clone)]
pub struct AnalysisRepository {
    pool: PgPool,
}

impl AnalysisRepository {
    /// Create a new analysis repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new analysis.
    pub async fn create(&self, data: &CreateAnalysis) -> AppResult<Analysis> {
        sqlx::query_as::<_, Analysis>(
            "INSERT INTO analyses (ad_id, framework, hooks, concepts, scripts, target_audience, \
                emotional_triggers, repurposed_idea, strengths_weaknesses, raw_response) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(data.ad_id)
        .bind(&data.framework)
        .bind(&data.hooks)
        .bind(&data.concepts)
        .bind(&data.scripts)
        .bind(&data.target_audience)
        .bind(&data.emotional_triggers)
        .bind(&data.repurposed_idea)
        .bind(&data.strengths_weaknesses)
        .bind(&data.raw_response)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create analysis", e))
    }

    /// List analyses for an ad, newest first.
    pub async fn find_by_ad(&self, ad_id: Uuid) -> AppResult<Vec<Analysis>> {
        sqlx::query_as::<_, Analysis>(
            "SELECT * FROM analyses WHERE ad_id = $1 ORDER BY created_at DESC",
        )
        .bind(ad_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list analyses", e))
    }

    /// The newest analysis for an ad, if any.
    pub async fn latest_for_ad(&self, ad_id: Uuid) -> AppResult<Option<Analysis>> {
        sqlx::query_as::<_, Analysis>(
            "SELECT * FROM analyses WHERE ad_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(ad_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find latest analysis", e))
    }

    /// Record the Drive file ID of the archived analysis document.
    pub async fn set_drive_file_id(&self, id: Uuid, drive_file_id: &str) -> AppResult<()> {
        sqlx::query("UPDATE analyses SET drive_file_id = $2 WHERE id = $1")
            .bind(id)
            .bind(drive_file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set drive_file_id", e)
            })?;
        Ok(())
    }
}
