//! Contest review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ContestStatus;

/// Review record for a contest submission
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestReview {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub reviewer_name: String,
    pub review_result: ReviewResult,
    pub review_comment: Option<String>,
    pub compliance_check: bool,
    pub budget_check: bool,
    pub resource_check: bool,
    pub reviewed_at: DateTime<Utc>,
}

/// Outcome of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewResult {
    Pending,
    Approved,
    Rejected,
}

impl ReviewResult {
    /// Status a contest moves to once this result is recorded
    pub fn contest_status(self) -> Option<ContestStatus> {
        match self {
            Self::Pending => None,
            Self::Approved => Some(ContestStatus::Published),
            Self::Rejected => Some(ContestStatus::Rejected),
        }
    }
}

impl std::fmt::Display for ReviewResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
