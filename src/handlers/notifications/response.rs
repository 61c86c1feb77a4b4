//! Notification response DTOs

use serde::Serialize;

use crate::models::Notification;

/// Notification list response
#[derive(Debug, Serialize)]
pub struct NotificationsListResponse {
    pub notifications: Vec<Notification>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
