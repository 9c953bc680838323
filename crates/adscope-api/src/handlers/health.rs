//! Health check handler.

use axum::extract::State;
use axum::Json;

use adscope_database::connection;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let database = connection::health_check(&state.db_pool).await.is_ok();
    let body = HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    };
    Ok(Json(serde_json::json!({ "success": true, "data": body })))
}
