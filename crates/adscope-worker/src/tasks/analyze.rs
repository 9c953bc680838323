//! Analyze a single ad.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;
use adscope_core::traits::AdAnalysis;
use adscope_entity::ad::Ad;
use adscope_entity::analysis::{Analysis, CreateAnalysis};
use adscope_entity::competitor::Competitor;

use super::{ad_input, brand_context, TaskContext};
use crate::report;

/// Result of a single-ad analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutcome {
    pub analysis: Analysis,
    pub drive_file_id: Option<String>,
}

impl TaskContext {
    /// Analyze one ad, persist the result, then archive it to Drive.
    ///
    /// The analysis is committed before the Drive upload starts, so an
    /// archive failure loses only the archive copy, never the analysis.
    pub async fn analyze_ad(&self, ad_id: Uuid) -> AppResult<AnalyzeOutcome> {
        let ad = self
            .ads
            .find_by_id(ad_id)
            .await?
            .ok_or_else(|| AppError::not_found("Ad not found"))?;
        let competitor = self
            .competitors
            .find_by_id(ad.competitor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Competitor not found"))?;
        let brand = self
            .brands
            .find_by_id(competitor.brand_id)
            .await?
            .ok_or_else(|| AppError::not_found("Brand not found"))?;

        let result = self
            .analyzer
            .analyze_ad(&ad_input(&ad), &brand_context(&brand))
            .await?;

        let analysis = self
            .analyses
            .create(&CreateAnalysis {
                ad_id,
                framework: result.framework.clone(),
                hooks: result.hooks.clone(),
                concepts: result.concepts.clone(),
                scripts: result.scripts.clone(),
                target_audience: result.target_audience.clone(),
                emotional_triggers: result.emotional_triggers.clone(),
                repurposed_idea: result.repurposed_idea.clone(),
                strengths_weaknesses: result.strengths_weaknesses.clone(),
                raw_response: serde_json::to_value(&result)?,
            })
            .await?;

        let mut drive_file_id = None;
        if let Some(token) = self.settings.google_refresh_token().await? {
            match self
                .archive_analysis(&token, &ad, &competitor, &brand.name, &result)
                .await
            {
                Ok(file_id) => {
                    self.analyses.set_drive_file_id(analysis.id, &file_id).await?;
                    drive_file_id = Some(file_id);
                }
                Err(e) => {
                    tracing::warn!(ad_id = %ad_id, error = %e, "failed to archive analysis to Drive");
                }
            }
        }

        Ok(AnalyzeOutcome {
            analysis,
            drive_file_id,
        })
    }

    /// Upload the analysis document into `<root>/<competitor>/<date>/`.
    async fn archive_analysis(
        &self,
        refresh_token: &str,
        ad: &Ad,
        competitor: &Competitor,
        brand_name: &str,
        result: &AdAnalysis,
    ) -> AppResult<String> {
        let now = Utc::now();
        let client = self.drive.connect(refresh_token);

        let root_id = client.get_or_create_folder(&self.drive_root, None).await?;
        let competitor_id = client
            .get_or_create_folder(&competitor.name, Some(&root_id))
            .await?;
        let date_id = client
            .get_or_create_folder(&report::date_folder_name(now), Some(&competitor_id))
            .await?;

        let document = report::analysis_document(ad, &competitor.name, brand_name, result, now);
        let uploaded = client
            .upload_file(
                &report::analysis_file_name(ad),
                document.as_bytes(),
                "text/markdown",
                Some(&date_id),
            )
            .await?;
        Ok(uploaded.id)
    }
}
