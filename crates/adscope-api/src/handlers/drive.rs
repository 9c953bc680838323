//! Google Drive connection handlers.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::Deserialize;

use adscope_core::error::AppError;

use crate::dto::response::{AuthUrlResponse, DriveStatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/drive/auth
pub async fn auth_url(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.config.drive.client_id.is_empty() || state.config.drive.client_secret.is_empty() {
        return Err(AppError::configuration("Google OAuth credentials not configured").into());
    }
    let auth_url = state.drive_oauth.consent_url()?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": AuthUrlResponse { auth_url },
    })))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// GET /api/drive/callback
///
/// Google redirects here after consent. The refresh token is stored in
/// settings and the browser is sent back to the app root.
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    if query.error.is_some() {
        return Redirect::temporary("/?error=drive_auth_denied");
    }
    let Some(code) = query.code else {
        return Redirect::temporary("/?error=no_code");
    };

    match state.drive_oauth.exchange_code(&code).await {
        Ok(refresh_token) => {
            match state
                .settings
                .set_google_refresh_token(Some(&refresh_token))
                .await
            {
                Ok(()) => Redirect::temporary("/?success=drive_connected"),
                Err(e) => {
                    tracing::error!(error = %e, "failed to store Drive refresh token");
                    Redirect::temporary("/?error=drive_auth_failed")
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Drive code exchange failed");
            Redirect::temporary("/?error=drive_auth_failed")
        }
    }
}

/// GET /api/drive/status
pub async fn status(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let connected = state.settings.google_refresh_token().await?.is_some();
    Ok(Json(serde_json::json!({
        "success": true,
        "data": DriveStatusResponse { connected },
    })))
}
