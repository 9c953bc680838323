//! Route definitions for the AdScope HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(brand_routes())
        .merge(competitor_routes())
        .merge(ad_routes())
        .merge(analysis_routes())
        .merge(job_routes())
        .merge(drive_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state))
        .with_state(state)
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Brand CRUD
fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(handlers::brand::list_brands))
        .route("/brands", post(handlers::brand::create_brand))
        .route("/brands/:id", get(handlers::brand::get_brand))
        .route("/brands/:id", put(handlers::brand::update_brand))
        .route("/brands/:id", delete(handlers::brand::delete_brand))
}

/// Competitor CRUD and the fetch trigger
fn competitor_routes() -> Router<AppState> {
    Router::new()
        .route("/competitors", get(handlers::competitor::list_competitors))
        .route("/competitors", post(handlers::competitor::create_competitor))
        .route("/competitors/:id", get(handlers::competitor::get_competitor))
        .route(
            "/competitors/:id",
            put(handlers::competitor::update_competitor),
        )
        .route(
            "/competitors/:id",
            delete(handlers::competitor::delete_competitor),
        )
        .route(
            "/competitors/:id/fetch",
            post(handlers::competitor::fetch_competitor_ads),
        )
}

/// Ad listing, detail, deletion
fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(handlers::ad::list_ads))
        .route("/ads/:id", get(handlers::ad::get_ad))
        .route("/ads/:id", delete(handlers::ad::delete_ad))
}

/// Analysis triggers
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/ads/:id/analyze", post(handlers::analysis::analyze_ad))
        .route("/analyze/batch", post(handlers::analysis::analyze_batch))
}

/// Job queue: cron trigger, manual trigger, status lookup
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/run", get(handlers::job::run_jobs))
        .route("/jobs/run", post(handlers::job::run_jobs_manual))
        .route("/jobs/:id", get(handlers::job::get_job))
}

/// Drive connection: consent, callback, status
fn drive_routes() -> Router<AppState> {
    Router::new()
        .route("/drive/auth", get(handlers::drive::auth_url))
        .route("/drive/callback", get(handlers::drive::callback))
        .route("/drive/status", get(handlers::drive::status))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
