//! Venue repository

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{error::AppResult, models::Venue};

/// Repository for contest venue operations
pub struct VenueRepository;

impl VenueRepository {
    /// Attach a venue to a contest
    pub async fn create<'e, E>(
        executor: E,
        contest_id: &Uuid,
        name: &str,
        capacity: Option<i32>,
        address: Option<&str>,
        facilities: &[String],
    ) -> AppResult<Venue>
    where
        E: PgExecutor<'e>,
    {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO contest_venues (contest_id, name, capacity, address, facilities)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(name)
        .bind(capacity)
        .bind(address)
        .bind(facilities)
        .fetch_one(executor)
        .await?;

        Ok(venue)
    }

    /// Venues of a single contest
    pub async fn list_for_contest<'e, E>(executor: E, contest_id: &Uuid) -> AppResult<Vec<Venue>>
    where
        E: PgExecutor<'e>,
    {
        let venues = sqlx::query_as::<_, Venue>(
            r#"SELECT * FROM contest_venues WHERE contest_id = $1 ORDER BY name ASC, id ASC"#,
        )
        .bind(contest_id)
        .fetch_all(executor)
        .await?;

        Ok(venues)
    }

    /// Venues of several contests in one round trip
    pub async fn list_for_contests<'e, E>(
        executor: E,
        contest_ids: &[Uuid],
    ) -> AppResult<Vec<Venue>>
    where
        E: PgExecutor<'e>,
    {
        if contest_ids.is_empty() {
            return Ok(Vec::new());
        }

        let venues = sqlx::query_as::<_, Venue>(
            r#"
            SELECT * FROM contest_venues
            WHERE contest_id = ANY($1)
            ORDER BY contest_id, name ASC, id ASC
            "#,
        )
        .bind(contest_ids)
        .fetch_all(executor)
        .await?;

        Ok(venues)
    }
}
