//! Job queue handlers: the cron trigger and job status lookup.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use adscope_core::error::AppError;

use crate::dto::request::RunJobsRequest;
use crate::dto::response::ProcessJobsResponse;
use crate::error::ApiError;
use crate::middleware::cron::require_cron_auth;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RunJobsQuery {
    pub limit: Option<usize>,
}

async fn run(state: &AppState, limit: Option<usize>) -> Result<Json<serde_json::Value>, ApiError> {
    let results = state.processor.process_jobs(limit).await?;
    let body = ProcessJobsResponse {
        processed: results.len(),
        results,
    };
    Ok(Json(serde_json::json!({ "success": true, "data": body })))
}

/// GET /api/jobs/run?limit=N - cron trigger.
pub async fn run_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RunJobsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_cron_auth(state.config.jobs.cron_secret.as_deref(), &headers)?;
    run(&state, query.limit).await
}

/// POST /api/jobs/run - manual trigger, same guard as the cron path.
pub async fn run_jobs_manual(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: Option<Json<RunJobsRequest>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_cron_auth(state.config.jobs.cron_secret.as_deref(), &headers)?;
    let Json(req) = req.unwrap_or_default();
    run(&state, req.limit).await
}

/// GET /api/jobs/:id - poll a queued job.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let job = state
        .jobs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;
    Ok(Json(serde_json::json!({ "success": true, "data": job })))
}
