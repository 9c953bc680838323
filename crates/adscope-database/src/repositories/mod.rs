//! Repository implementations for all AdScope entities.

pub mod ad;
pub mod analysis;
pub mod brand;
pub mod competitor;
pub mod job;
pub mod settings;

pub use ad::AdRepository;
pub use analysis::AnalysisRepository;
pub use brand::BrandRepository;
pub use competitor::CompetitorRepository;
pub use job::JobRepository;
pub use settings::SettingsRepository;
