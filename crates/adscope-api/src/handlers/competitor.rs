//! Competitor CRUD and fetch handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use adscope_core::error::AppError;
use adscope_entity::competitor::CreateCompetitor;
use adscope_entity::job::{FetchAdsPayload, JobPayload};

use crate::dto::request::{
    validate, CreateCompetitorRequest, FetchAdsRequest, UpdateCompetitorRequest,
};
use crate::dto::response::JobQueuedResponse;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCompetitorsQuery {
    pub brand_id: Option<Uuid>,
}

/// GET /api/competitors?brandId=...
pub async fn list_competitors(
    State(state): State<AppState>,
    Query(query): Query<ListCompetitorsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let competitors = state.competitors.find_all(query.brand_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": competitors }),
    ))
}

/// GET /api/competitors/:id
///
/// Includes the competitor's ads, newest first.
pub async fn get_competitor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let competitor = state
        .competitors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Competitor not found"))?;
    let ads = state.ads.find_all(Some(id)).await?;

    let mut data = serde_json::to_value(&competitor).map_err(AppError::from)?;
    data["ads"] = serde_json::to_value(&ads).map_err(AppError::from)?;

    Ok(Json(serde_json::json!({ "success": true, "data": data })))
}

/// POST /api/competitors
pub async fn create_competitor(
    State(state): State<AppState>,
    Json(req): Json<CreateCompetitorRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    validate(&req)?;

    let page_id = extract_page_id(&req.ad_library_url).ok_or_else(|| {
        AppError::validation("Invalid Facebook Ad Library URL (missing page id)")
    })?;

    state
        .brands
        .find_by_id(req.brand_id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    let competitor = state
        .competitors
        .create(&CreateCompetitor {
            brand_id: req.brand_id,
            name: req.name,
            ad_library_url: req.ad_library_url,
            page_id: Some(page_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": competitor })),
    ))
}

fn extract_page_id(url: &str) -> Option<String> {
    let parsed = adscope_scraper::url::parse_ad_library_url(url);
    if parsed.valid {
        parsed.page_id
    } else {
        None
    }
}

/// PUT /api/competitors/:id
pub async fn update_competitor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCompetitorRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;

    // A changed URL re-derives the page ID.
    let page_id = match req.ad_library_url.as_deref() {
        Some(url) => Some(extract_page_id(url).ok_or_else(|| {
            AppError::validation("Invalid Facebook Ad Library URL (missing page id)")
        })?),
        None => None,
    };

    let competitor = state
        .competitors
        .update(
            id,
            req.name.as_deref(),
            req.ad_library_url.as_deref(),
            page_id.as_deref(),
            req.is_active,
        )
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": competitor }),
    ))
}

/// DELETE /api/competitors/:id
pub async fn delete_competitor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.competitors.delete(id).await? {
        return Err(AppError::not_found("Competitor not found").into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/competitors/:id/fetch
///
/// Inline by default; `{"async": true}` enqueues a `FETCH_COMPETITOR_ADS`
/// job and answers 202 with the job ID.
pub async fn fetch_competitor_ads(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Option<Json<FetchAdsRequest>>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(req) = req.unwrap_or_default();
    validate(&req)?;

    state
        .competitors
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Competitor not found"))?;

    if req.run_async {
        let job = state
            .dispatcher
            .enqueue(
                JobPayload::FetchCompetitorAds(FetchAdsPayload {
                    competitor_id: id,
                    limit: req.limit,
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

    let outcome = state.tasks.fetch_competitor_ads(id, req.limit).await?;
    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "data": outcome })),
    ))
}
