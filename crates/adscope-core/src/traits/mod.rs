//! Collaborator traits implemented by the outer crates.
//!
//! The core job system talks to the Ad Library, the AI analyzer, and
//! cloud storage only through these traits, so every executor can be
//! driven by in-memory fakes in tests.

pub mod analyzer;
pub mod drive;
pub mod scraper;

pub use analyzer::{AdAnalysis, AdAnalyzer, AdInput, BrandContext, ReportItem};
pub use drive::{DriveClient, DriveConnector, DriveFile};
pub use scraper::{AdLibraryClient, ScrapeOutcome, ScrapedAd};
