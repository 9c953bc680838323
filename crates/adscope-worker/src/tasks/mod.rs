//! Task implementations, one per job type.
//!
//! Tasks hold everything a job execution can touch: the repositories and
//! the three external collaborators. They are also called directly by
//! the synchronous API paths, so the job queue and the HTTP handlers
//! share one implementation of each operation.

mod analyze;
mod batch;
mod fetch;

use std::sync::Arc;

use adscope_core::traits::{
    AdAnalyzer, AdInput, AdLibraryClient, BrandContext, DriveConnector,
};
use adscope_database::repositories::{
    AdRepository, AnalysisRepository, BrandRepository, CompetitorRepository, SettingsRepository,
};
use adscope_entity::ad::Ad;
use adscope_entity::brand::Brand;

pub use analyze::AnalyzeOutcome;
pub use batch::BatchOutcome;
pub use fetch::FetchOutcome;

/// Shared dependencies for all tasks.
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub brands: BrandRepository,
    pub competitors: CompetitorRepository,
    pub ads: AdRepository,
    pub analyses: AnalysisRepository,
    pub settings: SettingsRepository,
    pub scraper: Arc<dyn AdLibraryClient>,
    pub analyzer: Arc<dyn AdAnalyzer>,
    pub drive: Arc<dyn DriveConnector>,
    /// Root folder name of the Drive archive.
    pub drive_root: String,
}

pub(crate) fn ad_input(ad: &Ad) -> AdInput {
    AdInput {
        ad_copy: ad.ad_copy.clone(),
        headline: ad.headline.clone(),
        cta: ad.cta.clone(),
        media_type: ad.media_type.clone(),
        media_url: ad.media_url.clone(),
    }
}

pub(crate) fn brand_context(brand: &Brand) -> BrandContext {
    BrandContext {
        name: brand.name.clone(),
        description: brand.description.clone(),
        target_audience: brand.target_audience.clone(),
        tone_of_voice: brand.tone_of_voice.clone(),
        product_info: brand.product_info.clone(),
        industry: brand.industry.clone(),
    }
}
