//! Conflict response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{ContestConflict, DetectedConflict},
    services::DetectionReport,
};

/// Result of a detection run
#[derive(Debug, Serialize)]
pub struct DetectConflictsResponse {
    pub contest_id: Uuid,
    pub total_conflicts: usize,
    pub conflicts: Vec<DetectedConflict>,
}

impl From<DetectionReport> for DetectConflictsResponse {
    fn from(report: DetectionReport) -> Self {
        Self {
            contest_id: report.contest_id,
            total_conflicts: report.total_conflicts(),
            conflicts: report.conflicts,
        }
    }
}

/// Persisted conflicts of a contest
#[derive(Debug, Serialize)]
pub struct ConflictsListResponse {
    pub contest_id: Uuid,
    pub conflicts: Vec<ContestConflict>,
    pub unresolved: usize,
}
