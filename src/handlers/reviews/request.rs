//! Review request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_REMARK_LENGTH, MAX_REVIEWER_NAME_LENGTH},
    models::ReviewResult,
};

/// Review decision for a contest
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewContestRequest {
    #[validate(length(min = 1, max = MAX_REVIEWER_NAME_LENGTH))]
    pub reviewer_name: String,

    /// `approved` or `rejected`
    pub result: ReviewResult,

    #[validate(length(max = MAX_REMARK_LENGTH))]
    pub comment: Option<String>,

    pub compliance_check: Option<bool>,
    pub budget_check: Option<bool>,
    pub resource_check: Option<bool>,
}

/// List reviews query parameters
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub result: Option<ReviewResult>,
}
