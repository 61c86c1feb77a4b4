//! Notification request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// List notifications query parameters
#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub contest_id: Option<Uuid>,
    pub recipient: Option<String>,
    #[serde(default)]
    pub unread_only: bool,
}
