//! Brand CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use adscope_core::error::AppError;
use adscope_entity::brand::{CreateBrand, UpdateBrand};

use crate::dto::request::{validate, CreateBrandRequest, UpdateBrandRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/brands
pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let brands = state.brands.find_all().await?;

    let mut data = Vec::with_capacity(brands.len());
    for brand in brands {
        let competitors = state.competitors.find_all(Some(brand.id)).await?;
        let mut entry = serde_json::to_value(&brand).map_err(AppError::from)?;
        entry["competitors"] = serde_json::to_value(&competitors).map_err(AppError::from)?;
        data.push(entry);
    }

    Ok(Json(serde_json::json!({ "success": true, "data": data })))
}

/// GET /api/brands/:id
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let brand = state
        .brands
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;
    Ok(Json(serde_json::json!({ "success": true, "data": brand })))
}

/// POST /api/brands
pub async fn create_brand(
    State(state): State<AppState>,
    Json(req): Json<CreateBrandRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    validate(&req)?;
    let brand = state
        .brands
        .create(&CreateBrand {
            name: req.name,
            description: req.description,
            target_audience: req.target_audience,
            tone_of_voice: req.tone_of_voice,
            product_info: req.product_info,
            industry: req.industry,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": brand })),
    ))
}

/// PUT /api/brands/:id
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBrandRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let brand = state
        .brands
        .update(
            id,
            &UpdateBrand {
                name: req.name,
                description: req.description,
                target_audience: req.target_audience,
                tone_of_voice: req.tone_of_voice,
                product_info: req.product_info,
                industry: req.industry,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": brand })))
}

/// DELETE /api/brands/:id
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.brands.delete(id).await? {
        return Err(AppError::not_found("Brand not found").into());
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
