//! Settings repository implementation.

use sqlx::PgPool;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_entity::settings::Settings;

/// Repository for the singleton settings row.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the settings row, if it exists.
    pub async fn get(&self) -> AppResult<Option<Settings>> {
        sqlx::query_as::<_, Settings>("SELECT * FROM settings WHERE id = 'default'")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load settings", e))
    }

    /// The stored Google refresh token, if Drive is connected.
    pub async fn google_refresh_token(&self) -> AppResult<Option<String>> {
        Ok(self.get().await?.and_then(|s| s.google_refresh_token))
    }

    /// Store (or clear) the Google refresh token.
    pub async fn set_google_refresh_token(&self, token: Option<&str>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO settings (id, google_refresh_token) VALUES ('default', $1) \
             ON CONFLICT (id) DO UPDATE SET \
                google_refresh_token = EXCLUDED.google_refresh_token, \
                updated_at = NOW()",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store settings", e))?;
        Ok(())
    }
}
