//! HTTP client for the Generative Language API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use adscope_core::config::GeminiConfig;
use adscope_core::error::{AppError, ErrorKind};
use adscope_core::result::AppResult;
use adscope_core::traits::{AdAnalysis, AdAnalyzer, AdInput, BrandContext, ReportItem};

use crate::prompt;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// [`AdAnalyzer`] implementation backed by Gemini `generateContent`.
#[derive(Debug)]
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiAnalyzer {
    pub fn new(config: &GeminiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build Gemini HTTP client",
                    e,
                )
            })?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    async fn generate(&self, prompt_text: String) -> AppResult<String> {
        // Checked per request, so a keyless dev instance can still boot.
        if self.api_key.is_empty() {
            return Err(AppError::configuration("Gemini API key is not set"));
        }
        let url = format!(
            "{}/models/{}:generateContent",
            API_BASE, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt_text }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Gemini request failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Gemini request failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to decode Gemini response",
                e,
            )
        })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::external("Gemini returned no candidates"))
    }
}

#[async_trait]
impl AdAnalyzer for GeminiAnalyzer {
    async fn analyze_ad(&self, ad: &AdInput, brand: &BrandContext) -> AppResult<AdAnalysis> {
        let text = self.generate(prompt::analysis_prompt(ad, brand)).await?;
        let json = prompt::extract_json(&text);
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Gemini returned unparseable analysis JSON");
            AppError::with_source(ErrorKind::ExternalService, "Failed to analyze ad", e)
        })
    }

    async fn generate_report(
        &self,
        competitor_name: &str,
        items: &[ReportItem],
    ) -> AppResult<String> {
        self.generate(prompt::report_prompt(competitor_name, items))
            .await
    }
}
