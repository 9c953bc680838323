//! AI analysis collaborator trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Ad fields passed to the analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdInput {
    /// Primary ad text.
    pub ad_copy: Option<String>,
    /// Headline.
    pub headline: Option<String>,
    /// Call to action.
    pub cta: Option<String>,
    /// Media type.
    pub media_type: Option<String>,
    /// Media URL.
    pub media_url: Option<String>,
}

/// Brand fields used for repurposing suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandContext {
    /// Brand name.
    pub name: String,
    /// Brand description.
    pub description: Option<String>,
    /// Target audience.
    pub target_audience: Option<String>,
    /// Tone of voice.
    pub tone_of_voice: Option<String>,
    /// Product information.
    pub product_info: Option<String>,
    /// Industry.
    pub industry: Option<String>,
}

/// Structured analysis produced by the model.
///
/// The eight fields mirror the JSON contract in the analysis prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdAnalysis {
    /// Copywriting framework identified (AIDA, PAS, ...).
    pub framework: String,
    /// Opening hooks.
    pub hooks: String,
    /// Creative concept / angle.
    pub concepts: String,
    /// Script or visual-flow breakdown.
    pub scripts: String,
    /// Target audience.
    pub target_audience: String,
    /// Emotional triggers.
    pub emotional_triggers: String,
    /// Repurposing suggestion for the tracked brand.
    pub repurposed_idea: String,
    /// Strengths and weaknesses.
    pub strengths_weaknesses: String,
}

/// One ad + analysis pair fed into the aggregate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportItem {
    /// Original ad copy.
    pub ad_copy: Option<String>,
    /// Original headline.
    pub headline: Option<String>,
    /// The analysis produced for this ad.
    pub analysis: AdAnalysis,
}

/// Trait for the generative-AI analysis collaborator.
#[async_trait]
pub trait AdAnalyzer: Send + Sync + std::fmt::Debug {
    /// Analyze a single ad in the context of the tracked brand.
    async fn analyze_ad(&self, ad: &AdInput, brand: &BrandContext) -> AppResult<AdAnalysis>;

    /// Generate a markdown competitor report across analyzed ads.
    async fn generate_report(
        &self,
        competitor_name: &str,
        items: &[ReportItem],
    ) -> AppResult<String>;
}
