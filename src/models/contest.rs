//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Venue;

/// Contest database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub online_mode: bool,
    pub rules: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub incentives: Incentives,
    pub status: ContestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Prizes and awards a contest offers
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Incentives {
    pub first_prize: Option<String>,
    pub second_prize: Option<String>,
    pub third_prize: Option<String>,
    /// Whether participants receive a certificate
    pub certificate: bool,
    pub scholarship: Option<String>,
}

impl Contest {
    /// Scheduled window, present only when both ends are set
    pub fn schedule(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Whether this contest can be compared against `target_id` for conflicts
    pub fn is_candidate_for(&self, target_id: &Uuid) -> bool {
        self.id != *target_id && self.status != ContestStatus::Rejected && self.schedule().is_some()
    }
}

/// Contest lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Draft,
    Published,
    Ongoing,
    Completed,
    Archived,
    Rejected,
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Completed => write!(f, "completed"),
            Self::Archived => write!(f, "archived"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Contest together with the venues it books
#[derive(Debug, Clone, Serialize)]
pub struct ContestWithVenues {
    #[serde(flatten)]
    pub contest: Contest,
    pub venues: Vec<Venue>,
}

impl ContestWithVenues {
    /// Attach venues to their owning contests, preserving contest order
    pub fn group(contests: Vec<Contest>, venues: Vec<Venue>) -> Vec<Self> {
        let mut grouped: Vec<Self> = contests
            .into_iter()
            .map(|contest| Self {
                contest,
                venues: Vec::new(),
            })
            .collect();

        for venue in venues {
            if let Some(owner) = grouped.iter_mut().find(|c| c.contest.id == venue.contest_id) {
                owner.venues.push(venue);
            }
        }

        grouped
    }
}
