//! Contest repository

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Contest, ContestStatus, Incentives},
};

/// Column values for a new contest row
#[derive(Debug, Clone)]
pub struct NewContest<'a> {
    pub name: &'a str,
    pub contest_type: &'a str,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub location: Option<&'a str>,
    pub online_mode: bool,
    pub rules: Option<&'a str>,
    pub incentives: &'a Incentives,
}

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest in draft status
    pub async fn create<'e, E>(executor: E, contest: &NewContest<'_>) -> AppResult<Contest>
    where
        E: PgExecutor<'e>,
    {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (
                name, contest_type, start_date, end_date, registration_start,
                registration_end, location, online_mode, rules, status,
                first_prize, second_prize, third_prize, certificate, scholarship
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(contest.name)
        .bind(contest.contest_type)
        .bind(contest.start_date)
        .bind(contest.end_date)
        .bind(contest.registration_start)
        .bind(contest.registration_end)
        .bind(contest.location)
        .bind(contest.online_mode)
        .bind(contest.rules)
        .bind(ContestStatus::Draft)
        .bind(&contest.incentives.first_prize)
        .bind(&contest.incentives.second_prize)
        .bind(&contest.incentives.third_prize)
        .bind(contest.incentives.certificate)
        .bind(&contest.incentives.scholarship)
        .fetch_one(executor)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id<'e, E>(executor: E, id: &Uuid) -> AppResult<Option<Contest>>
    where
        E: PgExecutor<'e>,
    {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(contest)
    }

    /// Check whether a contest exists
    pub async fn exists<'e, E>(executor: E, id: &Uuid) -> AppResult<bool>
    where
        E: PgExecutor<'e>,
    {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM contests WHERE id = $1)"#)
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// Contests eligible for conflict comparison with `exclude_id`:
    /// not rejected, fully scheduled, ordered by start date.
    pub async fn list_candidates<'e, E>(executor: E, exclude_id: &Uuid) -> AppResult<Vec<Contest>>
    where
        E: PgExecutor<'e>,
    {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT * FROM contests
            WHERE id <> $1
                AND status <> $2
                AND start_date IS NOT NULL
                AND end_date IS NOT NULL
            ORDER BY start_date ASC, id ASC
            "#,
        )
        .bind(exclude_id)
        .bind(ContestStatus::Rejected)
        .fetch_all(executor)
        .await?;

        Ok(contests)
    }

    /// Move a contest to a new status
    pub async fn update_status<'e, E>(
        executor: E,
        id: &Uuid,
        status: ContestStatus,
    ) -> AppResult<Option<Contest>>
    where
        E: PgExecutor<'e>,
    {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            UPDATE contests
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(contest)
    }

    /// List contests with pagination, newest first
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        status: Option<ContestStatus>,
    ) -> AppResult<(Vec<Contest>, i64)> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT * FROM contests
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM contests WHERE ($1::text IS NULL OR status = $1)"#,
        )
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((contests, count))
    }

    /// Count contests in a given status
    pub async fn count_by_status<'e, E>(executor: E, status: ContestStatus) -> AppResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests WHERE status = $1"#)
            .bind(status)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
