//! Ad listing and deletion handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use adscope_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAdsQuery {
    pub competitor_id: Option<Uuid>,
    pub limit: Option<usize>,
}

/// GET /api/ads?competitorId=...&limit=...
pub async fn list_ads(
    State(state): State<AppState>,
    Query(query): Query<ListAdsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let mut ads = state.ads.find_all(query.competitor_id).await?;
    ads.truncate(limit);

    Ok(Json(serde_json::json!({ "success": true, "data": ads })))
}

/// GET /api/ads/:id
///
/// Includes every analysis of the ad, newest first.
pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ad = state
        .ads
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Ad not found"))?;
    let analyses = state.analyses.find_by_ad(id).await?;

    let mut data = serde_json::to_value(&ad).map_err(AppError::from)?;
    data["analyses"] = serde_json::to_value(&analyses).map_err(AppError::from)?;

    Ok(Json(serde_json::json!({ "success": true, "data": data })))
}

/// DELETE /api/ads/:id
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.ads.delete(id).await? {
        return Err(AppError::not_found("Ad not found").into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
