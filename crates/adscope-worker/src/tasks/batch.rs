//! Analyze a batch of ads and produce a competitor report.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;
use adscope_core::traits::{AdAnalysis, ReportItem};
use adscope_entity::ad::Ad;
use adscope_entity::analysis::{Analysis, CreateAnalysis};

use super::{ad_input, brand_context, TaskContext};
use crate::report;

/// How many of a competitor's newest ads a batch covers when no explicit
/// ad IDs are given.
const BATCH_AD_LIMIT: i64 = 10;

/// Result of a batch analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub analyzed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub report: String,
    pub drive_report_id: Option<String>,
}

fn report_item(ad: &Ad, analysis: &Analysis) -> ReportItem {
    ReportItem {
        ad_copy: ad.ad_copy.clone(),
        headline: ad.headline.clone(),
        analysis: AdAnalysis {
            framework: analysis.framework.clone().unwrap_or_default(),
            hooks: analysis.hooks.clone().unwrap_or_default(),
            concepts: analysis.concepts.clone().unwrap_or_default(),
            scripts: analysis.scripts.clone().unwrap_or_default(),
            target_audience: analysis.target_audience.clone().unwrap_or_default(),
            emotional_triggers: analysis.emotional_triggers.clone().unwrap_or_default(),
            repurposed_idea: analysis.repurposed_idea.clone().unwrap_or_default(),
            strengths_weaknesses: analysis.strengths_weaknesses.clone().unwrap_or_default(),
        },
    }
}

impl TaskContext {
    /// Analyze a set of ads with per-ad failure isolation, then generate
    /// an aggregate report from everything that has an analysis.
    ///
    /// Ads that already carry an analysis are skipped, but their latest
    /// analysis still feeds the report. One ad's analysis failure reduces
    /// the report, not the batch.
    pub async fn analyze_batch(
        &self,
        competitor_id: Option<Uuid>,
        ad_ids: Option<&[Uuid]>,
    ) -> AppResult<BatchOutcome> {
        let ads = match (ad_ids, competitor_id) {
            (Some(ids), _) => self.ads.find_by_ids(ids).await?,
            (None, Some(competitor_id)) => {
                self.ads
                    .find_by_competitor(competitor_id, BATCH_AD_LIMIT)
                    .await?
            }
            (None, None) => {
                return Err(AppError::validation("competitorId or adIds required"))
            }
        };

        if ads.is_empty() {
            return Err(AppError::not_found("No ads found to analyze"));
        }

        // All selected ads are expected to share a competitor; the first
        // one names the report and the Drive folder.
        let competitor = self
            .competitors
            .find_by_id(ads[0].competitor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Competitor not found"))?;
        let brand = self
            .brands
            .find_by_id(competitor.brand_id)
            .await?
            .ok_or_else(|| AppError::not_found("Brand not found"))?;
        let context = brand_context(&brand);

        let mut analyzed = 0;
        let mut skipped = 0;
        let mut failed = 0;
        let mut items = Vec::with_capacity(ads.len());

        for ad in &ads {
            if let Some(existing) = self.analyses.latest_for_ad(ad.id).await? {
                skipped += 1;
                items.push(report_item(ad, &existing));
                continue;
            }

            match self.analyzer.analyze_ad(&ad_input(ad), &context).await {
                Ok(result) => {
                    let analysis = self
                        .analyses
                        .create(&CreateAnalysis {
                            ad_id: ad.id,
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
                    analyzed += 1;
                    items.push(report_item(ad, &analysis));
                }
                Err(e) => {
                    tracing::warn!(ad_id = %ad.id, error = %e, "failed to analyze ad");
                    failed += 1;
                }
            }
        }

        let mut report_content = String::new();
        let mut drive_report_id = None;

        if !items.is_empty() {
            report_content = self
                .analyzer
                .generate_report(&competitor.name, &items)
                .await?;

            if let Some(token) = self.settings.google_refresh_token().await? {
                match self
                    .archive_report(&token, &competitor.name, &report_content)
                    .await
                {
                    Ok(file_id) => drive_report_id = Some(file_id),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to save report to Drive");
                    }
                }
            }
        }

        tracing::info!(
            competitor = %competitor.name,
            analyzed,
            skipped,
            failed,
            "batch analysis finished"
        );

        Ok(BatchOutcome {
            analyzed,
            skipped,
            failed,
            report: report_content,
            drive_report_id,
        })
    }

    /// Upload the aggregate report into `<root>/<competitor>/`.
    async fn archive_report(
        &self,
        refresh_token: &str,
        competitor_name: &str,
        content: &str,
    ) -> AppResult<String> {
        let client = self.drive.connect(refresh_token);
        let root_id = client.get_or_create_folder(&self.drive_root, None).await?;
        let competitor_id = client
            .get_or_create_folder(competitor_name, Some(&root_id))
            .await?;
        let uploaded = client
            .upload_file(
                &report::report_file_name(Utc::now()),
                content.as_bytes(),
                "text/markdown",
                Some(&competitor_id),
            )
            .await?;
        Ok(uploaded.id)
    }
}
