//! Analysis handlers: single-ad and batch, inline or queued.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use adscope_entity::job::{AnalyzeAdPayload, AnalyzeBatchPayload, JobPayload};

use crate::dto::request::{AnalyzeAdRequest, AnalyzeBatchRequest};
use crate::dto::response::JobQueuedResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/ads/:id/analyze
pub async fn analyze_ad(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Option<Json<AnalyzeAdRequest>>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(req) = req.unwrap_or_default();

    if req.run_async {
        let job = state
            .dispatcher
            .enqueue(JobPayload::AnalyzeAd(AnalyzeAdPayload { ad_id: id }), None)
            .await?;
        return Ok((
            StatusCode::ACCEPTED,
            Json(serde_json::json!({
                "success": true,
                "data": JobQueuedResponse { job_id: job.id },
            })),
        ));
    }

    let outcome = state.tasks.analyze_ad(id).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "data": outcome })),
    ))
}

/// POST /api/analyze/batch
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeBatchRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.check_selectors()?;

    if req.run_async {
        let job = state
            .dispatcher
            .enqueue(
                JobPayload::AnalyzeCompetitorAds(AnalyzeBatchPayload {
                    competitor_id: req.competitor_id,
                    ad_ids: req.ad_ids,
                }),
                None,
            )
            .await?;
        return Ok((
            StatusCode::ACCEPTED,
            Json(serde_json::json!({
                "success": true,
                "data": JobQueuedResponse { job_id: job.id },
            })),
        ));
    }

    let outcome = state
        .tasks
        .analyze_batch(req.competitor_id, req.ad_ids.as_deref())
        .await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "data": outcome })),
    ))
}
