//! Review handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{error::AppResult, services::ReviewService, state::AppState, utils::page_params};

use super::{
    request::ListReviewsQuery,
    response::{ReviewStatsResponse, ReviewsListResponse},
};

/// List review records, newest first
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> AppResult<Json<ReviewsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page);

    let (reviews, total) =
        ReviewService::list_reviews(state.db(), page, per_page, query.result).await?;

    Ok(Json(ReviewsListResponse {
        reviews,
        total,
        page,
        per_page,
    }))
}

/// Review dashboard counters
pub async fn review_stats(State(state): State<AppState>) -> AppResult<Json<ReviewStatsResponse>> {
    Ok(Json(ReviewService::stats(state.db()).await?))
}
