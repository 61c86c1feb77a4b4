//! Review response DTOs

use serde::Serialize;

use crate::models::ContestReview;

/// Review list response
#[derive(Debug, Serialize)]
pub struct ReviewsListResponse {
    pub reviews: Vec<ContestReview>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Review dashboard counters
#[derive(Debug, Serialize)]
pub struct ReviewStatsResponse {
    /// Contests still in `draft`
    pub pending: i64,
    pub published: i64,
    pub rejected: i64,
    pub with_unresolved_conflicts: i64,
}
