//! Notification handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    constants::MAX_RECIPIENT_LENGTH,
    db::repositories::NotificationFilter,
    error::{AppError, AppResult},
    models::Notification,
    services::NotificationService,
    state::AppState,
    utils::page_params,
};

use super::{request::ListNotificationsQuery, response::NotificationsListResponse};

/// List notifications, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> AppResult<Json<NotificationsListResponse>> {
    if query
        .recipient
        .as_deref()
        .is_some_and(|r| r.len() > MAX_RECIPIENT_LENGTH)
    {
        return Err(AppError::InvalidInput("recipient is too long".to_string()));
    }

    let (page, per_page) = page_params(query.page, query.per_page);
    let filter = NotificationFilter {
        contest_id: query.contest_id,
        recipient: query.recipient.as_deref(),
        unread_only: query.unread_only,
    };

    let (notifications, total) =
        NotificationService::list_notifications(state.db(), &filter, page, per_page).await?;

    Ok(Json(NotificationsListResponse {
        notifications,
        total,
        page,
        per_page,
    }))
}

/// Mark a notification as read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Notification>> {
    let notification = NotificationService::mark_read(state.db(), &id).await?;
    Ok(Json(notification))
}
