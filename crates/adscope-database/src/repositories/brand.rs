//! Brand repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::brand::{Brand, CreateBrand, UpdateBrand};

/// Repository for brand CRUD.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    /// Create a new brand repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a brand by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Brand>> {
        sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find brand", e))
    }

    /// List all brands, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Brand>> {
        sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list brands", e))
    }

    /// Create a new brand.
    pub async fn create(&self, data: &CreateBrand) -> AppResult<Brand> {
        sqlx::query_as::<_, Brand>(
            "INSERT INTO brands (name, description, target_audience, tone_of_voice, product_info, industry) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.target_audience)
        .bind(&data.tone_of_voice)
        .bind(&data.product_info)
        .bind(&data.industry)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create brand", e))
    }

    /// Update a brand's context fields. Omitted fields keep their stored
    /// values.
    pub async fn update(&self, id: Uuid, data: &UpdateBrand) -> AppResult<Brand> {
        sqlx::query_as::<_, Brand>(
            "UPDATE brands SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                target_audience = COALESCE($4, target_audience), \
                tone_of_voice = COALESCE($5, tone_of_voice), \
                product_info = COALESCE($6, product_info), \
                industry = COALESCE($7, industry), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.target_audience)
        .bind(&data.tone_of_voice)
        .bind(&data.product_info)
        .bind(&data.industry)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update brand", e))?
        .ok_or_else(|| AppError::not_found("Brand not found"))
    }

    /// Delete a brand (cascades to competitors and ads).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete brand", e))?;
        Ok(result.rows_affected() > 0)
    }
}
