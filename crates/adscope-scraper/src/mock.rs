//! Mock ad generator for environments without Meta API access.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;

use adscope_core::error::AppError;
use adscope_core::result::AppResult;
use adscope_core::traits::{AdLibraryClient, ScrapeOutcome, ScrapedAd};

use crate::url::parse_ad_library_url;

const MOCK_AD_COPIES: [&str; 5] = [
    "Transform your mornings with our revolutionary coffee blend. Wake up to the rich, smooth taste that 50,000+ customers can't stop talking about.",
    "Tired of feeling tired? Our all-natural energy supplement gives you 8 hours of clean energy without the crash. Try it risk-free today!",
    "The secret to glowing skin isn't expensive treatments, it's our 3-step routine. Join 100,000 women who've transformed their skin in just 2 weeks.",
    "Stop wasting money on gym memberships you don't use. Get fit at home with our 15-minute workout program. Results guaranteed or your money back!",
    "Your dog deserves the best. Our premium, vet-approved food is made with real ingredients your furry friend will love.",
];

const MOCK_HEADLINES: [&str; 5] = [
    "Wake Up Better",
    "Natural Energy, All Day",
    "Your Best Skin Ever",
    "Fit in 15 Minutes",
    "Happy Dogs, Happy Life",
];

const MOCK_CTAS: [&str; 5] = ["Shop Now", "Learn More", "Get Started", "Try Free", "Order Now"];

const MOCK_IMPRESSIONS: [&str; 5] = ["1M-5M", "500K-1M", "100K-500K", "50K-100K", "10K-50K"];

/// Generates plausible ads without touching the network.
///
/// IDs embed the page ID and a timestamp so repeated runs produce fresh
/// rows rather than colliding on the upsert key.
#[derive(Debug, Default)]
pub struct MockScraper;

impl MockScraper {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AdLibraryClient for MockScraper {
    async fn fetch_ads(&self, ad_library_url: &str, limit: usize) -> AppResult<ScrapeOutcome> {
        let parsed = parse_ad_library_url(ad_library_url);
        if !parsed.valid {
            return Err(AppError::validation(
                "Invalid Ad Library URL. Please provide a valid Facebook Ad Library URL.",
            ));
        }
        let page_id = parsed.page_id.unwrap_or_else(|| "unknown".to_string());

        let now = Utc::now();
        let stamp = now.timestamp_millis();
        let mut rng = rand::thread_rng();

        let ads = (0..limit.min(10))
            .map(|i| {
                let age_secs = rng.gen_range(0..30 * 24 * 60 * 60);
                ScrapedAd {
                    ad_library_id: format!("mock_{}_{}_{}", page_id, i + 1, stamp),
                    ad_copy: Some(MOCK_AD_COPIES[i % 5].to_string()),
                    headline: Some(MOCK_HEADLINES[i % 5].to_string()),
                    cta: Some(MOCK_CTAS[i % 5].to_string()),
                    media_url: None,
                    media_type: Some(if i % 3 == 0 { "video" } else { "image" }.to_string()),
                    thumbnail_url: Some(format!(
                        "https://placehold.co/400x400/png?text=Ad+{}",
                        i + 1
                    )),
                    landing_page: Some("https://example.com/landing".to_string()),
                    impression_range: Some(MOCK_IMPRESSIONS[i % 5].to_string()),
                    start_date: Some(now - Duration::seconds(age_secs)),
                    status: "active".to_string(),
                }
            })
            .collect();

        Ok(ScrapeOutcome {
            ads,
            page_id: Some(page_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    #[test]
    fn test_mock_respects_limit() {
        let scraper = MockScraper::new();
        let outcome = block_on(
            scraper.fetch_ads("https://www.facebook.com/ads/library/?id=555", 3),
        )
        .unwrap();
        assert_eq!(outcome.ads.len(), 3);
        assert_eq!(outcome.page_id.as_deref(), Some("555"));
    }

    #[test]
    fn test_mock_caps_at_ten() {
        let scraper = MockScraper::new();
        let outcome = block_on(
            scraper.fetch_ads("https://www.facebook.com/ads/library/?id=555", 50),
        )
        .unwrap();
        assert_eq!(outcome.ads.len(), 10);
    }

    #[test]
    fn test_mock_ids_embed_page_id() {
        let scraper = MockScraper::new();
        let outcome = block_on(
            scraper.fetch_ads("https://www.facebook.com/ads/library/?view_all_page_id=777", 2),
        )
        .unwrap();
        assert!(outcome.ads[0].ad_library_id.starts_with("mock_777_1_"));
        assert!(outcome.ads[1].ad_library_id.starts_with("mock_777_2_"));
    }

    #[test]
    fn test_mock_rejects_invalid_url() {
        let scraper = MockScraper::new();
        let err = block_on(scraper.fetch_ads("https://example.com/", 5)).unwrap_err();
        assert!(err.to_string().contains("Invalid Ad Library URL"));
    }
}
