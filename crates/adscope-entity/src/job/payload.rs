//! Typed job payloads.
//!
//! `type` + `payload` is a sum type: one variant per job kind, each
//! carrying its own payload shape. Enqueuing goes through [`JobPayload`],
//! so a malformed payload can never reach the store; the processor
//! reconstructs the variant from the stored `(job_type, json)` pair and
//! treats a shape mismatch as that job's failure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adscope_core::{AppError, AppResult};

use super::status::JobType;

/// Payload for `FETCH_COMPETITOR_ADS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchAdsPayload {
    /// The competitor to fetch ads for.
    pub competitor_id: Uuid,
    /// Maximum number of ads to fetch (defaults to 10 when absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Payload for `ANALYZE_COMPETITOR_ADS`. Exactly one selector must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBatchPayload {
    /// Analyze the newest ads of this competitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_id: Option<Uuid>,
    /// Analyze exactly these ads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_ids: Option<Vec<Uuid>>,
}

/// Payload for `ANALYZE_AD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeAdPayload {
    /// The ad to analyze.
    pub ad_id: Uuid,
}

/// A job's type and payload, as one value.
#[derive(Debug, Clone)]
pub enum JobPayload {
    /// Scrape ads for one competitor.
    FetchCompetitorAds(FetchAdsPayload),
    /// Analyze a batch of ads and produce a report.
    AnalyzeCompetitorAds(AnalyzeBatchPayload),
    /// Analyze a single ad.
    AnalyzeAd(AnalyzeAdPayload),
}

impl JobPayload {
    /// The job type this payload belongs to.
    pub fn job_type(&self) -> JobType {
        match self {
            Self::FetchCompetitorAds(_) => JobType::FetchCompetitorAds,
            Self::AnalyzeCompetitorAds(_) => JobType::AnalyzeCompetitorAds,
            Self::AnalyzeAd(_) => JobType::AnalyzeAd,
        }
    }

    /// Serialize the payload body for storage.
    pub fn to_value(&self) -> AppResult<serde_json::Value> {
        let value = match self {
            Self::FetchCompetitorAds(p) => serde_json::to_value(p)?,
            Self::AnalyzeCompetitorAds(p) => serde_json::to_value(p)?,
            Self::AnalyzeAd(p) => serde_json::to_value(p)?,
        };
        Ok(value)
    }

    /// Reconstruct a typed payload from a stored `(job_type, json)` pair.
    pub fn from_parts(job_type: JobType, payload: &serde_json::Value) -> AppResult<Self> {
        let parsed = match job_type {
            JobType::FetchCompetitorAds => {
                Self::FetchCompetitorAds(serde_json::from_value(payload.clone()).map_err(|e| {
                    AppError::validation(format!("Malformed FETCH_COMPETITOR_ADS payload: {e}"))
                })?)
            }
            JobType::AnalyzeCompetitorAds => {
                Self::AnalyzeCompetitorAds(serde_json::from_value(payload.clone()).map_err(
                    |e| {
                        AppError::validation(format!(
                            "Malformed ANALYZE_COMPETITOR_ADS payload: {e}"
                        ))
                    },
                )?)
            }
            JobType::AnalyzeAd => {
                Self::AnalyzeAd(serde_json::from_value(payload.clone()).map_err(|e| {
                    AppError::validation(format!("Malformed ANALYZE_AD payload: {e}"))
                })?)
            }
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_keys_are_camel_case() {
        let competitor_id = Uuid::new_v4();
        let payload = JobPayload::FetchCompetitorAds(FetchAdsPayload {
            competitor_id,
            limit: Some(5),
        });

        let value = payload.to_value().unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "competitorId": competitor_id, "limit": 5 })
        );
    }

    #[test]
    fn test_round_trip_through_parts() {
        let ad_id = Uuid::new_v4();
        let payload = JobPayload::AnalyzeAd(AnalyzeAdPayload { ad_id });

        let value = payload.to_value().unwrap();
        let restored = JobPayload::from_parts(payload.job_type(), &value).unwrap();

        match restored {
            JobPayload::AnalyzeAd(p) => assert_eq!(p.ad_id, ad_id),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_is_a_validation_error() {
        let err = JobPayload::from_parts(
            JobType::AnalyzeAd,
            &serde_json::json!({ "competitorId": Uuid::new_v4() }),
        )
        .unwrap_err();
        assert_eq!(err.kind, adscope_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_omitted_limit_is_not_serialized() {
        let payload = JobPayload::FetchCompetitorAds(FetchAdsPayload {
            competitor_id: Uuid::new_v4(),
            limit: None,
        });
        let value = payload.to_value().unwrap();
        assert!(value.get("limit").is_none());
    }
}
