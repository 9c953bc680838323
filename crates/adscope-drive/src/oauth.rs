//! OAuth2 flow for Drive access.

use serde::Deserialize;
use url::Url;

use adscope_core::config::DriveConfig;
use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";

/// Handles the consent URL, code exchange and token refresh.
#[derive(Debug, Clone)]
pub struct DriveOAuth {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl DriveOAuth {
    pub fn new(config: &DriveConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    /// The URL the operator visits to grant Drive access.
    ///
    /// `prompt=consent` forces Google to reissue a refresh token even for
    /// a previously authorized client.
    pub fn consent_url(&self) -> AppResult<String> {
        if self.client_id.is_empty() {
            return Err(AppError::configuration(
                "Google OAuth client is not configured",
            ));
        }
        let mut url = Url::parse(AUTH_ENDPOINT)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Bad auth endpoint", e))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", DRIVE_FILE_SCOPE)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent");
        Ok(url.into())
    }

    /// Exchange an authorization code for a refresh token.
    pub async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let response = reqwest::Client::new()
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Token exchange failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Token exchange failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let tokens: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to decode token response",
                e,
            )
        })?;
        tokens
            .refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::external("Google did not return a refresh token"))
    }

    /// Mint a short-lived access token from a stored refresh token.
    pub async fn access_token(&self, refresh_token: &str) -> AppResult<String> {
        let response = reqwest::Client::new()
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("refresh_token", refresh_token),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Token refresh failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Token refresh failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let tokens: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to decode token response",
                e,
            )
        })?;
        tokens
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::external("Google did not return an access token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oauth() -> DriveOAuth {
        DriveOAuth {
            client_id: "client-123".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:8080/api/drive/callback".to_string(),
        }
    }

    #[test]
    fn test_consent_url_carries_offline_consent_params() {
        let url = oauth().consent_url().unwrap();
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("accounts.google.com"));
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("client_id".into(), "client-123".into())));
        assert!(pairs.contains(&("access_type".into(), "offline".into())));
        assert!(pairs.contains(&("prompt".into(), "consent".into())));
        assert!(pairs.contains(&(
            "scope".into(),
            "https://www.googleapis.com/auth/drive.file".into()
        )));
    }

    #[test]
    fn test_consent_url_requires_client_id() {
        let oauth = DriveOAuth {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
        };
        assert!(oauth.consent_url().is_err());
    }
}
