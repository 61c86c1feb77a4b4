//! Conflict repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ContestConflict, DetectedConflict},
};

/// Repository for contest conflict operations
pub struct ConflictRepository;

impl ConflictRepository {
    /// Take the transaction-scoped advisory lock for a contest's detection runs.
    ///
    /// Released automatically on commit or rollback.
    pub async fn lock_detection<'e, E>(executor: E, contest_id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"SELECT pg_advisory_xact_lock(hashtextextended($1::uuid::text, 0))"#)
            .bind(contest_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Delete every unresolved conflict of a contest, returning how many were removed
    pub async fn delete_unresolved<'e, E>(executor: E, contest_id: &Uuid) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"DELETE FROM contest_conflicts WHERE contest_id = $1 AND is_resolved = FALSE"#,
        )
        .bind(contest_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Insert one detected conflict for a contest
    pub async fn insert<'e, E>(
        executor: E,
        contest_id: &Uuid,
        conflict: &DetectedConflict,
    ) -> AppResult<ContestConflict>
    where
        E: PgExecutor<'e>,
    {
        let conflict = sqlx::query_as::<_, ContestConflict>(
            r#"
            INSERT INTO contest_conflicts (
                contest_id, conflict_type, conflict_with_id, description, severity
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(conflict.conflict_type)
        .bind(conflict.with_id)
        .bind(&conflict.description)
        .bind(conflict.severity)
        .fetch_one(executor)
        .await?;

        Ok(conflict)
    }

    /// All conflicts of a contest, most severe and most recent first
    pub async fn list_for_contest<'e, E>(
        executor: E,
        contest_id: &Uuid,
    ) -> AppResult<Vec<ContestConflict>>
    where
        E: PgExecutor<'e>,
    {
        let conflicts = sqlx::query_as::<_, ContestConflict>(
            r#"
            SELECT * FROM contest_conflicts
            WHERE contest_id = $1
            ORDER BY
                CASE severity WHEN 'high' THEN 3 WHEN 'medium' THEN 2 ELSE 1 END DESC,
                detected_at DESC
            "#,
        )
        .bind(contest_id)
        .fetch_all(executor)
        .await?;

        Ok(conflicts)
    }

    /// Mark a conflict resolved. Re-resolving overwrites the resolution and its time.
    pub async fn resolve<'e, E>(
        executor: E,
        conflict_id: &Uuid,
        resolution: Option<&str>,
    ) -> AppResult<Option<ContestConflict>>
    where
        E: PgExecutor<'e>,
    {
        let conflict = sqlx::query_as::<_, ContestConflict>(
            r#"
            UPDATE contest_conflicts
            SET is_resolved = TRUE, resolution = $2, resolved_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(conflict_id)
        .bind(resolution)
        .fetch_optional(executor)
        .await?;

        Ok(conflict)
    }

    /// Number of contests with at least one unresolved conflict
    pub async fn count_contests_with_unresolved<'e, E>(executor: E) -> AppResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(DISTINCT contest_id) FROM contest_conflicts WHERE is_resolved = FALSE"#,
        )
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Number of unresolved conflicts of one contest
    pub async fn count_unresolved<'e, E>(executor: E, contest_id: &Uuid) -> AppResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM contest_conflicts
            WHERE contest_id = $1 AND is_resolved = FALSE
            "#,
        )
        .bind(contest_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}
