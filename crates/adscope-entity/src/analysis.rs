//! Analysis entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted AI analysis of one ad.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Analysis {
    /// Unique analysis identifier.
    pub id: Uuid,
    /// The analyzed ad.
    pub ad_id: Uuid,
    /// Copywriting framework identified.
    pub framework: Option<String>,
    /// Opening hooks.
    pub hooks: Option<String>,
    /// Creative concept / angle.
    pub concepts: Option<String>,
    /// Script or visual-flow breakdown.
    pub scripts: Option<String>,
    /// Target audience.
    pub target_audience: Option<String>,
    /// Emotional triggers.
    pub emotional_triggers: Option<String>,
    /// Repurposing suggestion for the tracked brand.
    pub repurposed_idea: Option<String>,
    /// Strengths and weaknesses.
    pub strengths_weaknesses: Option<String>,
    /// Raw model response (JSON).
    pub raw_response: Option<serde_json::Value>,
    /// Drive file ID of the archived analysis document.
    pub drive_file_id: Option<String>,
    /// When the analysis was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to persist a new analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnalysis {
    /// The analyzed ad.
    pub ad_id: Uuid,
    /// Copywriting framework identified.
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
    /// Repurposing suggestion.
    pub repurposed_idea: String,
    /// Strengths and weaknesses.
    pub strengths_weaknesses: String,
    /// Raw model response.
    pub raw_response: serde_json::Value,
}
