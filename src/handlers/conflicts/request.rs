//! Conflict request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_REMARK_LENGTH;

/// Resolve conflict request
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveConflictRequest {
    #[validate(length(max = MAX_REMARK_LENGTH))]
    pub resolution: Option<String>,
}
