//! Contest review repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ContestReview, ReviewResult},
};

/// Column values for a new review row
#[derive(Debug, Clone)]
pub struct NewReview<'a> {
    pub contest_id: Uuid,
    pub reviewer_name: &'a str,
    pub review_result: ReviewResult,
    pub review_comment: Option<&'a str>,
    pub compliance_check: bool,
    pub budget_check: bool,
    pub resource_check: bool,
}

/// Repository for contest review operations
pub struct ReviewRepository;

impl ReviewRepository {
    /// Record a review
    pub async fn create<'e, E>(executor: E, review: &NewReview<'_>) -> AppResult<ContestReview>
    where
        E: PgExecutor<'e>,
    {
        let review = sqlx::query_as::<_, ContestReview>(
            r#"
            INSERT INTO contest_reviews (
                contest_id, reviewer_name, review_result, review_comment,
                compliance_check, budget_check, resource_check
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(review.contest_id)
        .bind(review.reviewer_name)
        .bind(review.review_result)
        .bind(review.review_comment)
        .bind(review.compliance_check)
        .bind(review.budget_check)
        .bind(review.resource_check)
        .fetch_one(executor)
        .await?;

        Ok(review)
    }

    /// List reviews, newest first
    pub async fn list(
        pool: &PgPool,
        result: Option<ReviewResult>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ContestReview>, i64)> {
        let reviews = sqlx::query_as::<_, ContestReview>(
            r#"
            SELECT * FROM contest_reviews
            WHERE ($1::text IS NULL OR review_result = $1)
            ORDER BY reviewed_at DESC, id DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(result)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM contest_reviews
            WHERE ($1::text IS NULL OR review_result = $1)
            "#,
        )
        .bind(result)
        .fetch_one(pool)
        .await?;

        Ok((reviews, count))
    }
}
