//! Contest response DTOs

use serde::Serialize;

use crate::{
    handlers::conflicts::response::DetectConflictsResponse,
    models::{Contest, ContestResources, Venue},
};

/// Contest creation response
#[derive(Debug, Serialize)]
pub struct ContestCreatedResponse {
    #[serde(flatten)]
    pub contest: Contest,
    pub venues: Vec<Venue>,
    #[serde(flatten)]
    pub resources: ContestResources,
    /// Result of the detection run started by the creation; `null` if it failed
    pub conflict_check: Option<DetectConflictsResponse>,
}

/// Contest with its venues and resources
#[derive(Debug, Serialize)]
pub struct ContestDetailResponse {
    #[serde(flatten)]
    pub contest: Contest,
    pub venues: Vec<Venue>,
    #[serde(flatten)]
    pub resources: ContestResources,
    pub unresolved_conflicts: i64,
}

/// Contest list response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<Contest>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
