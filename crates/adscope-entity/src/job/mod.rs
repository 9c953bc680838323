//! Background job entity: model, status lifecycle, and typed payloads.

pub mod model;
pub mod payload;
pub mod status;

pub use model::{Job, ProcessedJob};
pub use payload::{AnalyzeAdPayload, AnalyzeBatchPayload, FetchAdsPayload, JobPayload};
pub use status::{JobStatus, JobType};
