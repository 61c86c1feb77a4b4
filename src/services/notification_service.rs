//! Notification service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{NotificationFilter, NotificationRepository},
    error::{AppError, AppResult},
    models::Notification,
    utils::pagination::page_bounds,
};

/// Notification service for business logic
pub struct NotificationService;

impl NotificationService {
    /// List notifications, newest first
    pub async fn list_notifications(
        pool: &PgPool,
        filter: &NotificationFilter<'_>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Notification>, i64)> {
        let (offset, limit) = page_bounds(page, per_page);
        NotificationRepository::list(pool, filter, offset, limit).await
    }

    /// Mark a notification as read
    pub async fn mark_read(pool: &PgPool, id: &Uuid) -> AppResult<Notification> {
        NotificationRepository::mark_read(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }
}
