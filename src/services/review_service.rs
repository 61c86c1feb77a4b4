//! Contest review service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::REVIEW_RESULT_TITLE,
    db::repositories::{
        ConflictRepository, ContestRepository, NewReview, NotificationRepository,
        ReviewRepository,
    },
    error::{AppError, AppResult},
    handlers::reviews::{request::ReviewContestRequest, response::ReviewStatsResponse},
    models::{ContestReview, ContestStatus, NewNotification, NotificationType, ReviewResult},
    utils::pagination::page_bounds,
};

/// Review service for business logic
pub struct ReviewService;

impl ReviewService {
    /// Record a review decision for a contest.
    ///
    /// The review row, the contest status change and the `review_result`
    /// notification are written in one transaction.
    pub async fn review_contest(
        pool: &PgPool,
        contest_id: &Uuid,
        payload: ReviewContestRequest,
    ) -> AppResult<ContestReview> {
        let status = payload.result.contest_status().ok_or_else(|| {
            AppError::Validation("Review result must be approved or rejected".to_string())
        })?;

        let mut tx = pool.begin().await?;

        let contest = ContestRepository::update_status(&mut *tx, contest_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let review = ReviewRepository::create(
            &mut *tx,
            &NewReview {
                contest_id: *contest_id,
                reviewer_name: payload.reviewer_name.trim(),
                review_result: payload.result,
                review_comment: payload.comment.as_deref(),
                compliance_check: payload.compliance_check.unwrap_or(true),
                budget_check: payload.budget_check.unwrap_or(true),
                resource_check: payload.resource_check.unwrap_or(true),
            },
        )
        .await?;

        NotificationRepository::insert(
            &mut *tx,
            &NewNotification {
                contest_id: *contest_id,
                notification_type: NotificationType::ReviewResult,
                title: REVIEW_RESULT_TITLE.to_string(),
                content: review_summary(&contest.name, &review),
                recipient: None,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            contest_id = %contest_id,
            result = %review.review_result,
            status = %contest.status,
            "Contest reviewed"
        );

        Ok(review)
    }

    /// List review records
    pub async fn list_reviews(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        result: Option<ReviewResult>,
    ) -> AppResult<(Vec<ContestReview>, i64)> {
        let (offset, limit) = page_bounds(page, per_page);
        ReviewRepository::list(pool, result, offset, limit).await
    }

    /// Review dashboard counters
    pub async fn stats(pool: &PgPool) -> AppResult<ReviewStatsResponse> {
        let (pending, published, rejected, with_conflicts) = futures::try_join!(
            ContestRepository::count_by_status(pool, ContestStatus::Draft),
            ContestRepository::count_by_status(pool, ContestStatus::Published),
            ContestRepository::count_by_status(pool, ContestStatus::Rejected),
            ConflictRepository::count_contests_with_unresolved(pool),
        )?;

        Ok(ReviewStatsResponse {
            pending,
            published,
            rejected,
            with_unresolved_conflicts: with_conflicts,
        })
    }
}

fn review_summary(contest_name: &str, review: &ContestReview) -> String {
    let mut summary = format!(
        "Contest \"{}\" was {} by {}",
        contest_name, review.review_result, review.reviewer_name
    );
    if let Some(comment) = review.review_comment.as_deref().filter(|c| !c.trim().is_empty()) {
        summary.push_str(": ");
        summary.push_str(comment.trim());
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review(result: ReviewResult, comment: Option<&str>) -> ContestReview {
        ContestReview {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            reviewer_name: "Reviewer A".to_string(),
            review_result: result,
            review_comment: comment.map(str::to_string),
            compliance_check: true,
            budget_check: true,
            resource_check: false,
            reviewed_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_includes_comment() {
        let rejected = review(ReviewResult::Rejected, Some(" Budget too high "));
        let text = review_summary("Spring Cup", &rejected);
        assert_eq!(
            text,
            "Contest \"Spring Cup\" was rejected by Reviewer A: Budget too high"
        );
    }

    #[test]
    fn test_summary_without_comment() {
        let text = review_summary("Spring Cup", &review(ReviewResult::Approved, Some("  ")));
        assert_eq!(text, "Contest \"Spring Cup\" was approved by Reviewer A");
    }
}
