//! Venue model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Venue booked by a contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Venue {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub name: String,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    /// Facility tags, stored as TEXT[]
    pub facilities: Vec<String>,
}

impl Venue {
    /// Two venues are the same place when their names or addresses match exactly.
    ///
    /// A blank address never matches anything.
    pub fn is_same_place(&self, other: &Venue) -> bool {
        if self.name == other.name {
            return true;
        }

        match (self.address.as_deref(), other.address.as_deref()) {
            (Some(a), Some(b)) => !a.trim().is_empty() && a == b,
            _ => false,
        }
    }
}
