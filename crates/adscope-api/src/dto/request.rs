//! Request DTOs.
//!
//! Wire keys are camelCase. Validation errors surface as 400s with the
//! validator's message.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;

/// Validate a request DTO, mapping failures to a validation error.
pub fn validate<T: Validate>(req: &T) -> AppResult<()> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// POST /api/brands
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "Brand name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub tone_of_voice: Option<String>,
    pub product_info: Option<String>,
    pub industry: Option<String>,
}

/// PUT /api/brands/:id
///
/// Partial update; fields left out of the body stay as they are.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    #[validate(length(min = 1, message = "Brand name is required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub tone_of_voice: Option<String>,
    pub product_info: Option<String>,
    pub industry: Option<String>,
}

/// POST /api/competitors
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitorRequest {
    pub brand_id: Uuid,
    #[validate(length(min = 1, message = "Competitor name is required"))]
    pub name: String,
    #[validate(url(message = "adLibraryUrl must be a valid URL"))]
    pub ad_library_url: String,
}

/// PUT /api/competitors/:id
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompetitorRequest {
    #[validate(length(min = 1, message = "Competitor name is required"))]
    pub name: Option<String>,
    #[validate(url(message = "adLibraryUrl must be a valid URL"))]
    pub ad_library_url: Option<String>,
    pub is_active: Option<bool>,
}

/// POST /api/competitors/:id/fetch
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FetchAdsRequest {
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
    /// Enqueue instead of running inline.
    #[serde(rename = "async", default)]
    pub run_async: bool,
}

/// POST /api/ads/:id/analyze
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeAdRequest {
    /// Enqueue instead of running inline.
    #[serde(rename = "async", default)]
    pub run_async: bool,
}

/// POST /api/analyze/batch
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBatchRequest {
    pub competitor_id: Option<Uuid>,
    pub ad_ids: Option<Vec<Uuid>>,
    /// Enqueue instead of running inline.
    #[serde(rename = "async", default)]
    pub run_async: bool,
}

impl AnalyzeBatchRequest {
    /// Exactly like the queue task: one of the two selectors must be set.
    pub fn check_selectors(&self) -> AppResult<()> {
        if self.competitor_id.is_none() && self.ad_ids.is_none() {
            return Err(AppError::validation("competitorId or adIds required"));
        }
        Ok(())
    }
}

/// POST /api/jobs/run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunJobsRequest {
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_brand_name_fails_validation() {
        let req = CreateBrandRequest {
            name: String::new(),
            description: None,
            target_audience: None,
            tone_of_voice: None,
            product_info: None,
            industry: None,
        };
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_brand_update_name_is_optional_but_not_blank() {
        let req: UpdateBrandRequest =
            serde_json::from_str(r#"{"description": "New positioning"}"#).unwrap();
        assert!(validate(&req).is_ok());

        let req: UpdateBrandRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_batch_request_requires_a_selector() {
        let req = AnalyzeBatchRequest::default();
        let err = req.check_selectors().unwrap_err();
        assert_eq!(err.message, "competitorId or adIds required");
    }

    #[test]
    fn test_async_key_deserializes() {
        let req: AnalyzeAdRequest = serde_json::from_str(r#"{"async": true}"#).unwrap();
        assert!(req.run_async);
        let req: AnalyzeAdRequest = serde_json::from_str("{}").unwrap();
        assert!(!req.run_async);
    }

    #[test]
    fn test_bad_ad_library_url_fails_validation() {
        let req = CreateCompetitorRequest {
            brand_id: Uuid::new_v4(),
            name: "Rival".to_string(),
            ad_library_url: "not-a-url".to_string(),
        };
        assert!(validate(&req).is_err());
    }
}
