//! Competitor repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::competitor::{Competitor, CreateCompetitor};

/// Repository for competitor CRUD and fetch bookkeeping.
#[derive(Debug, Clone)]
pub struct CompetitorRepository {
    pool: PgPool,
}

impl CompetitorRepository {
    /// Create a new competitor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a competitor by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Competitor>> {
        sqlx::query_as::<_, Competitor>("SELECT * FROM competitors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find competitor", e))
    }

    /// List competitors, optionally filtered by brand, newest first.
    pub async fn find_all(&self, brand_id: Option<Uuid>) -> AppResult<Vec<Competitor>> {
        match brand_id {
            Some(brand_id) => sqlx::query_as::<_, Competitor>(
                "SELECT * FROM competitors WHERE brand_id = $1 ORDER BY created_at DESC",
            )
            .bind(brand_id)
            .fetch_all(&self.pool)
            .await,
            None => {
                sqlx::query_as::<_, Competitor>("SELECT * FROM competitors ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list competitors", e))
    }

    /// Create a new competitor.
    pub async fn create(&self, data: &CreateCompetitor) -> AppResult<Competitor> {
        sqlx::query_as::<_, Competitor>(
            "INSERT INTO competitors (brand_id, name, ad_library_url, page_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.brand_id)
        .bind(&data.name)
        .bind(&data.ad_library_url)
        .bind(&data.page_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create competitor", e))
    }

    /// Update mutable competitor fields.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        ad_library_url: Option<&str>,
        page_id: Option<&str>,
        is_active: Option<bool>,
    ) -> AppResult<Competitor> {
        sqlx::query_as::<_, Competitor>(
            "UPDATE competitors SET \
                name = COALESCE($2, name), \
                ad_library_url = COALESCE($3, ad_library_url), \
                page_id = COALESCE($4, page_id), \
                is_active = COALESCE($5, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(ad_library_url)
        .bind(page_id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update competitor", e))?
        .ok_or_else(|| AppError::not_found("Competitor not found"))
    }

    /// Stamp the last successful fetch time.
    pub async fn touch_last_fetched(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE competitors SET last_fetched = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last_fetched", e)
            })?;
        Ok(())
    }

    /// Delete a competitor (cascades to its ads).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM competitors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete competitor", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
