//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::CONFLICT_ALERT_TITLE;

use super::ContestConflict;

/// Notification database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub content: String,
    pub recipient: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    StatusChange,
    ConflictAlert,
    ReviewResult,
    System,
}

/// Notification waiting to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub contest_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub content: String,
    pub recipient: Option<String>,
}

impl NewNotification {
    /// Alert raised for a freshly detected conflict
    pub fn conflict_alert(conflict: &ContestConflict, recipient: Option<&str>) -> Self {
        Self {
            contest_id: conflict.contest_id,
            notification_type: NotificationType::ConflictAlert,
            title: CONFLICT_ALERT_TITLE.to_string(),
            content: conflict.description.clone(),
            recipient: recipient.map(str::to_string),
        }
    }
}
