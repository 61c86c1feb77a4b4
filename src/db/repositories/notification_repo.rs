//! Notification repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewNotification, Notification},
};

/// Filters for listing notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter<'a> {
    pub contest_id: Option<Uuid>,
    pub recipient: Option<&'a str>,
    pub unread_only: bool,
}

/// Repository for notification operations
pub struct NotificationRepository;

impl NotificationRepository {
    /// Insert a notification
    pub async fn insert<'e, E>(
        executor: E,
        notification: &NewNotification,
    ) -> AppResult<Notification>
    where
        E: PgExecutor<'e>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO contest_notifications (
                contest_id, notification_type, title, content, recipient
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(notification.contest_id)
        .bind(notification.notification_type)
        .bind(&notification.title)
        .bind(&notification.content)
        .bind(notification.recipient.as_deref())
        .fetch_one(executor)
        .await?;

        Ok(notification)
    }

    /// List notifications, newest first
    pub async fn list(
        pool: &PgPool,
        filter: &NotificationFilter<'_>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Notification>, i64)> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM contest_notifications
            WHERE
                ($1::uuid IS NULL OR contest_id = $1)
                AND ($2::text IS NULL OR recipient = $2)
                AND ($3 = FALSE OR is_read = FALSE)
            ORDER BY created_at DESC, id DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(filter.contest_id)
        .bind(filter.recipient)
        .bind(filter.unread_only)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM contest_notifications
            WHERE
                ($1::uuid IS NULL OR contest_id = $1)
                AND ($2::text IS NULL OR recipient = $2)
                AND ($3 = FALSE OR is_read = FALSE)
            "#,
        )
        .bind(filter.contest_id)
        .bind(filter.recipient)
        .bind(filter.unread_only)
        .fetch_one(pool)
        .await?;

        Ok((notifications, count))
    }

    /// Mark a notification as read
    pub async fn mark_read<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<Notification>>
    where
        E: PgExecutor<'e>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE contest_notifications
            SET is_read = TRUE
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(notification)
    }
}
