//! Ad repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::ad::{Ad, UpsertAd};

/// Repository for ad rows scraped from the Ad Library.
#[derive(Debug, Clone)]
pub struct AdRepository {
    pool: PgPool,
}

impl AdRepository {
    /// Create a new ad repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an ad by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Ad>> {
        sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ad", e))
    }

    /// Find ads by explicit IDs.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Ad>> {
        sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ads by ids", e))
    }

    /// List the newest ads of a competitor, capped at `limit`.
    pub async fn find_by_competitor(&self, competitor_id: Uuid, limit: i64) -> AppResult<Vec<Ad>> {
        sqlx::query_as::<_, Ad>(
            "SELECT * FROM ads WHERE competitor_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(competitor_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ads", e))
    }

    /// List ads, optionally filtered by competitor, newest first.
    pub async fn find_all(&self, competitor_id: Option<Uuid>) -> AppResult<Vec<Ad>> {
        match competitor_id {
            Some(competitor_id) => sqlx::query_as::<_, Ad>(
                "SELECT * FROM ads WHERE competitor_id = $1 ORDER BY created_at DESC",
            )
            .bind(competitor_id)
            .fetch_all(&self.pool)
            .await,
            None => {
                sqlx::query_as::<_, Ad>("SELECT * FROM ads ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ads", e))
    }

    /// Insert or update an ad keyed by `(competitor_id, ad_library_id)`.
    ///
    /// Re-fetching the same external ad updates the existing row, so the
    /// fetch executor is idempotent.
    pub async fn upsert(&self, data: &UpsertAd) -> AppResult<Ad> {
        sqlx::query_as::<_, Ad>(
            "INSERT INTO ads (competitor_id, ad_library_id, ad_copy, headline, cta, media_url, \
                media_type, thumbnail_url, landing_page, impression_range, start_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             ON CONFLICT (competitor_id, ad_library_id) DO UPDATE SET \
                ad_copy = EXCLUDED.ad_copy, \
                headline = EXCLUDED.headline, \
                cta = EXCLUDED.cta, \
                media_url = EXCLUDED.media_url, \
                media_type = EXCLUDED.media_type, \
                thumbnail_url = EXCLUDED.thumbnail_url, \
                landing_page = EXCLUDED.landing_page, \
                impression_range = EXCLUDED.impression_range, \
                start_date = EXCLUDED.start_date, \
                status = EXCLUDED.status, \
                updated_at = NOW() \
             RETURNING *",
        )
        .bind(data.competitor_id)
        .bind(&data.ad_library_id)
        .bind(&data.ad_copy)
        .bind(&data.headline)
        .bind(&data.cta)
        .bind(&data.media_url)
        .bind(&data.media_type)
        .bind(&data.thumbnail_url)
        .bind(&data.landing_page)
        .bind(&data.impression_range)
        .bind(data.start_date)
        .bind(&data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert ad", e))
    }

    /// Delete an ad.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete ad", e))?;
        Ok(result.rows_affected() > 0)
    }
}
