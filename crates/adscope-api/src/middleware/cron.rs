//! Shared-secret guard for the cron trigger endpoint.

use axum::http::HeaderMap;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;

/// Check a request against the configured cron secret.
///
/// Accepts either `Authorization: Bearer <secret>` or `x-cron-secret:
/// <secret>`. When no secret is configured the endpoint is open, which
/// is the development default.
pub fn is_authorized_for_cron(
    configured: Option<&str>,
    bearer: Option<&str>,
    header_secret: Option<&str>,
) -> bool {
    let Some(secret) = configured else {
        return true;
    };
    bearer == Some(secret) || header_secret == Some(secret)
}

/// Enforce the cron guard for a request.
pub fn require_cron_auth(configured: Option<&str>, headers: &HeaderMap) -> AppResult<()> {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let header_secret = headers.get("x-cron-secret").and_then(|v| v.to_str().ok());

    if is_authorized_for_cron(configured, bearer, header_secret) {
        Ok(())
    } else {
        Err(AppError::unauthorized("Unauthorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_open_when_no_secret_configured() {
        assert!(is_authorized_for_cron(None, None, None));
    }

    #[test]
    fn test_bearer_token_matches() {
        assert!(is_authorized_for_cron(Some("s3cret"), Some("s3cret"), None));
    }

    #[test]
    fn test_header_secret_matches() {
        assert!(is_authorized_for_cron(Some("s3cret"), None, Some("s3cret")));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        assert!(!is_authorized_for_cron(Some("s3cret"), Some("wrong"), None));
        assert!(!is_authorized_for_cron(Some("s3cret"), None, Some("wrong")));
        assert!(!is_authorized_for_cron(Some("s3cret"), None, None));
    }

    #[test]
    fn test_require_cron_auth_parses_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer s3cret"));
        assert!(require_cron_auth(Some("s3cret"), &headers).is_ok());
    }

    #[test]
    fn test_require_cron_auth_rejects_missing_headers() {
        let headers = HeaderMap::new();
        let err = require_cron_auth(Some("s3cret"), &headers).unwrap_err();
        assert_eq!(err.kind, adscope_core::error::ErrorKind::Unauthorized);
    }
}
