//! Fetch ads for one competitor.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;
use adscope_entity::ad::{Ad, UpsertAd};

use super::TaskContext;

const DEFAULT_FETCH_LIMIT: usize = 10;

/// Result of a fetch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchOutcome {
    pub ads_found: usize,
    pub ads_saved: usize,
    /// The upserted rows, returned by the synchronous fetch endpoint.
    pub ads: Vec<Ad>,
}

impl TaskContext {
    /// Scrape the competitor's Ad Library page and upsert every ad found.
    pub async fn fetch_competitor_ads(
        &self,
        competitor_id: Uuid,
        limit: Option<usize>,
    ) -> AppResult<FetchOutcome> {
        let competitor = self
            .competitors
            .find_by_id(competitor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Competitor not found"))?;

        let outcome = self
            .scraper
            .fetch_ads(
                &competitor.ad_library_url,
                limit.unwrap_or(DEFAULT_FETCH_LIMIT),
            )
            .await?;

        let mut saved = Vec::with_capacity(outcome.ads.len());
        for scraped in &outcome.ads {
            let ad = self
                .ads
                .upsert(&UpsertAd {
                    competitor_id,
                    ad_library_id: scraped.ad_library_id.clone(),
                    ad_copy: scraped.ad_copy.clone(),
                    headline: scraped.headline.clone(),
                    cta: scraped.cta.clone(),
                    media_url: scraped.media_url.clone(),
                    media_type: scraped.media_type.clone(),
                    thumbnail_url: scraped.thumbnail_url.clone(),
                    landing_page: scraped.landing_page.clone(),
                    impression_range: scraped.impression_range.clone(),
                    start_date: scraped.start_date,
                    status: scraped.status.clone(),
                })
                .await?;
            saved.push(ad);
        }

        self.competitors
            .touch_last_fetched(competitor_id, Utc::now())
            .await?;

        tracing::info!(
            competitor_id = %competitor_id,
            ads_found = outcome.ads.len(),
            ads_saved = saved.len(),
            "fetched competitor ads"
        );

        Ok(FetchOutcome {
            ads_found: outcome.ads.len(),
            ads_saved: saved.len(),
            ads: saved,
        })
    }
}
