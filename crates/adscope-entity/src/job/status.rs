//! Job status and type enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a background job.
///
/// Lifecycle: `pending → running → {completed | failed}`. The
/// pending→running transition happens only through the processor's
/// conditional claim; `completed` and `failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Waiting to be claimed.
    Pending,
    /// Claimed by a processor invocation.
    Running,
    /// Successfully completed.
    Completed,
    /// Failed; `last_error` carries the message.
    Failed,
}

impl JobStatus {
    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of work a job represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    /// Scrape ads for one competitor from the Ad Library.
    FetchCompetitorAds,
    /// Analyze a batch of ads and produce an aggregate report.
    AnalyzeCompetitorAds,
    /// Analyze a single ad.
    AnalyzeAd,
}

impl JobType {
    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchCompetitorAds => "FETCH_COMPETITOR_ADS",
            Self::AnalyzeCompetitorAds => "ANALYZE_COMPETITOR_ADS",
            Self::AnalyzeAd => "ANALYZE_AD",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_job_type_wire_format() {
        assert_eq!(
            serde_json::to_value(JobType::FetchCompetitorAds).unwrap(),
            serde_json::json!("FETCH_COMPETITOR_ADS")
        );
        assert_eq!(
            serde_json::from_value::<JobType>(serde_json::json!("ANALYZE_AD")).unwrap(),
            JobType::AnalyzeAd
        );
    }
}
