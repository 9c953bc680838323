//! Meta Graph API scraper.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_core::traits::{AdLibraryClient, ScrapeOutcome, ScrapedAd};

use crate::url::parse_ad_library_url;

/// Scraper backed by the Meta Ad Library Graph API (`ads_archive`).
#[derive(Debug)]
pub struct GraphApiScraper {
    client: reqwest::Client,
    access_token: String,
    api_version: String,
}

#[derive(Debug, Deserialize)]
struct AdsArchiveResponse {
    #[serde(default)]
    data: Vec<AdsArchiveRow>,
}

#[derive(Debug, Deserialize)]
struct AdsArchiveRow {
    id: String,
    #[serde(default)]
    ad_creative_bodies: Vec<String>,
    #[serde(default)]
    ad_creative_link_titles: Vec<String>,
    #[serde(default)]
    ad_creative_link_captions: Vec<String>,
    ad_snapshot_url: Option<String>,
    impressions: Option<serde_json::Value>,
    ad_delivery_start_time: Option<String>,
    ad_delivery_stop_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: Option<GraphError>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<i64>,
    error_subcode: Option<i64>,
}

const ADS_ARCHIVE_FIELDS: &str = "id,ad_creative_bodies,ad_creative_link_captions,\
    ad_creative_link_titles,ad_snapshot_url,page_name,publisher_platforms,\
    estimated_audience_size,impressions,spend,currency,ad_delivery_start_time,\
    ad_delivery_stop_time";

impl GraphApiScraper {
    pub fn new(access_token: String, api_version: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            api_version,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://graph.facebook.com/{}/ads_archive",
            self.api_version
        )
    }

    /// Condense a Graph API error body into a single diagnostic line.
    fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<GraphErrorBody>(body) {
            if let Some(error) = parsed.error {
                let mut parts = Vec::new();
                if let Some(message) = error.message {
                    parts.push(message);
                }
                if let Some(error_type) = error.error_type {
                    parts.push(format!("type={error_type}"));
                }
                if let Some(code) = error.code {
                    parts.push(format!("code={code}"));
                }
                if let Some(subcode) = error.error_subcode {
                    parts.push(format!("subcode={subcode}"));
                }
                if !parts.is_empty() {
                    return parts.join(" | ");
                }
            }
        }
        if body.is_empty() {
            format!("API request failed (status {})", status.as_u16())
        } else {
            format!("API request failed (status {}): {}", status.as_u16(), body)
        }
    }
}

fn parse_delivery_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // The API often returns bare dates for delivery times.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<AdsArchiveRow> for ScrapedAd {
    fn from(row: AdsArchiveRow) -> Self {
        let status = if row.ad_delivery_stop_time.is_some() {
            "inactive"
        } else {
            "active"
        };
        ScrapedAd {
            ad_library_id: row.id,
            ad_copy: row.ad_creative_bodies.into_iter().next(),
            headline: row.ad_creative_link_titles.into_iter().next(),
            cta: row.ad_creative_link_captions.into_iter().next(),
            media_url: None,
            media_type: Some("unknown".to_string()),
            thumbnail_url: row.ad_snapshot_url,
            landing_page: None,
            impression_range: row.impressions.map(|v| v.to_string()),
            start_date: row
                .ad_delivery_start_time
                .as_deref()
                .and_then(parse_delivery_time),
            status: status.to_string(),
        }
    }
}

#[async_trait]
impl AdLibraryClient for GraphApiScraper {
    async fn fetch_ads(&self, ad_library_url: &str, limit: usize) -> AppResult<ScrapeOutcome> {
        let parsed = parse_ad_library_url(ad_library_url);
        if !parsed.valid {
            return Err(AppError::validation("Invalid Ad Library URL"));
        }
        let page_id = parsed
            .page_id
            .ok_or_else(|| AppError::validation("Could not extract page ID from URL"))?;

        tracing::debug!(page_id = %page_id, limit, "querying ads_archive");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("ad_reached_countries", "['US']"),
                ("ad_active_status", "ALL"),
                ("search_page_ids", page_id.as_str()),
                ("ad_type", "ALL"),
                ("fields", ADS_ARCHIVE_FIELDS),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Ad Library request failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(Self::describe_failure(status, &body)));
        }

        let payload: AdsArchiveResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to decode Ad Library response",
                e,
            )
        })?;

        Ok(ScrapeOutcome {
            ads: payload.data.into_iter().map(ScrapedAd::from).collect(),
            page_id: Some(page_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_failure_prefers_graph_error_fields() {
        let body = r#"{"error":{"message":"Invalid OAuth access token","type":"OAuthException","code":190,"error_subcode":463}}"#;
        let message = GraphApiScraper::describe_failure(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(
            message,
            "Invalid OAuth access token | type=OAuthException | code=190 | subcode=463"
        );
    }

    #[test]
    fn test_describe_failure_falls_back_to_body() {
        let message =
            GraphApiScraper::describe_failure(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(message, "API request failed (status 500): boom");
    }

    #[test]
    fn test_row_mapping_picks_first_creative_and_status() {
        let row = AdsArchiveRow {
            id: "123".to_string(),
            ad_creative_bodies: vec!["first body".to_string(), "second body".to_string()],
            ad_creative_link_titles: vec!["title".to_string()],
            ad_creative_link_captions: vec![],
            ad_snapshot_url: Some("https://www.facebook.com/ads/archive/render_ad/?id=123".into()),
            impressions: Some(serde_json::json!({"lower_bound": "1000"})),
            ad_delivery_start_time: Some("2024-03-01".to_string()),
            ad_delivery_stop_time: None,
        };
        let ad = ScrapedAd::from(row);
        assert_eq!(ad.ad_library_id, "123");
        assert_eq!(ad.ad_copy.as_deref(), Some("first body"));
        assert_eq!(ad.cta, None);
        assert_eq!(ad.status, "active");
        assert!(ad.start_date.is_some());
    }

    #[test]
    fn test_stopped_delivery_maps_to_inactive() {
        let row = AdsArchiveRow {
            id: "9".to_string(),
            ad_creative_bodies: vec![],
            ad_creative_link_titles: vec![],
            ad_creative_link_captions: vec![],
            ad_snapshot_url: None,
            impressions: None,
            ad_delivery_start_time: None,
            ad_delivery_stop_time: Some("2024-01-31".to_string()),
        };
        assert_eq!(ScrapedAd::from(row).status, "inactive");
    }
}
