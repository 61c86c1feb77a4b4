//! Conflict model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted conflict between a contest and another contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestConflict {
    pub id: Uuid,
    /// Contest the conflict was detected for
    pub contest_id: Uuid,
    pub conflict_type: ConflictType,
    /// The other contest involved; cleared if that contest is deleted
    pub conflict_with_id: Option<Uuid>,
    pub description: String,
    pub severity: Severity,
    pub is_resolved: bool,
    pub resolution: Option<String>,
    pub detected_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Kind of clash between two contests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    Time,
    Venue,
    Resource,
    Personnel,
}

impl std::fmt::Display for ConflictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Venue => write!(f, "venue"),
            Self::Resource => write!(f, "resource"),
            Self::Personnel => write!(f, "personnel"),
        }
    }
}

/// Conflict severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Conflict produced by a detection run, before it is persisted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetectedConflict {
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub with_id: Uuid,
    pub with_name: String,
    pub description: String,
    pub severity: Severity,
}
