//! Conflict handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult, models::ContestConflict, services::ConflictService, state::AppState,
};

use super::{
    request::ResolveConflictRequest,
    response::{ConflictsListResponse, DetectConflictsResponse},
};

/// Run conflict detection for a contest
pub async fn detect_conflicts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DetectConflictsResponse>> {
    let report =
        ConflictService::detect_conflicts(&state.conflict_store(), &id, state.alert_recipient())
            .await?;

    Ok(Json(report.into()))
}

/// List persisted conflicts of a contest
pub async fn list_conflicts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ConflictsListResponse>> {
    let conflicts = ConflictService::list_conflicts(&state.conflict_store(), &id).await?;
    let unresolved = conflicts.iter().filter(|c| !c.is_resolved).count();

    Ok(Json(ConflictsListResponse {
        contest_id: id,
        conflicts,
        unresolved,
    }))
}

/// Mark a conflict resolved
pub async fn resolve_conflict(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResolveConflictRequest>,
) -> AppResult<Json<ContestConflict>> {
    payload.validate()?;

    let conflict = ConflictService::resolve_conflict(
        &state.conflict_store(),
        &id,
        payload.resolution.as_deref(),
    )
    .await?;

    Ok(Json(conflict))
}
