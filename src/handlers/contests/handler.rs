//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::reviews::request::ReviewContestRequest,
    models::ContestReview,
    services::{ContestService, ReviewService},
    state::AppState,
    utils::page_params,
};

use super::{
    request::{CreateContestRequest, ListContestsQuery},
    response::{ContestCreatedResponse, ContestDetailResponse, ContestsListResponse},
};

/// List contests, newest first
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page);

    let (contests, total) =
        ContestService::list_contests(state.db(), page, per_page, query.status).await?;

    Ok(Json(ContestsListResponse {
        contests,
        total,
        page,
        per_page,
    }))
}

/// Create a new contest and check it for conflicts
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestCreatedResponse>)> {
    payload.validate()?;

    let created =
        ContestService::create_contest(state.db(), state.alert_recipient(), payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestDetailResponse>> {
    let contest = ContestService::get_contest(state.db(), &id).await?;
    Ok(Json(contest))
}

/// Approve or reject a contest
pub async fn review_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewContestRequest>,
) -> AppResult<(StatusCode, Json<ContestReview>)> {
    payload.validate()?;

    let review = ReviewService::review_contest(state.db(), &id, payload).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
