//! Conflict store
//!
//! [`ConflictStore`] is the persistence seam used by conflict detection and
//! resolution. A detection run works inside a [`DetectionScope`]: every read
//! and write goes through the same transaction, and nothing is visible to
//! other requests until [`DetectionScope::commit`] succeeds. Dropping a scope
//! without committing discards all of its writes.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    db::repositories::{
        ConflictRepository, ContestRepository, NotificationRepository, VenueRepository,
    },
    error::AppResult,
    models::{Contest, ContestConflict, DetectedConflict, NewNotification, Venue},
};

/// Persistence operations needed by conflict detection and resolution
#[async_trait]
pub trait ConflictStore: Send + Sync {
    type Scope: DetectionScope;

    /// Open a detection scope for `contest_id`.
    ///
    /// Scopes for the same contest are serialized: a second caller waits until
    /// the first scope commits or is dropped.
    async fn begin_detection(&self, contest_id: &Uuid) -> AppResult<Self::Scope>;

    /// Whether the contest exists
    async fn contest_exists(&self, contest_id: &Uuid) -> AppResult<bool>;

    /// All persisted conflicts of a contest, most severe and most recent first
    async fn list_conflicts(&self, contest_id: &Uuid) -> AppResult<Vec<ContestConflict>>;

    /// Mark a conflict resolved; `None` when no conflict has this id
    async fn resolve_conflict(
        &self,
        conflict_id: &Uuid,
        resolution: Option<&str>,
    ) -> AppResult<Option<ContestConflict>>;
}

/// Transactional unit of work for a single detection run
#[async_trait]
pub trait DetectionScope: Send {
    async fn get_contest(&mut self, id: &Uuid) -> AppResult<Option<Contest>>;

    /// Contests other than `exclude_id` that are not rejected and have both dates
    async fn list_candidate_contests(&mut self, exclude_id: &Uuid) -> AppResult<Vec<Contest>>;

    async fn list_venues(&mut self, contest_ids: &[Uuid]) -> AppResult<Vec<Venue>>;

    async fn delete_unresolved(&mut self, contest_id: &Uuid) -> AppResult<u64>;

    /// Insert conflicts in the given order and return the stored rows
    async fn insert_conflicts(
        &mut self,
        contest_id: &Uuid,
        conflicts: &[DetectedConflict],
    ) -> AppResult<Vec<ContestConflict>>;

    async fn insert_notifications(&mut self, notifications: &[NewNotification]) -> AppResult<()>;

    /// Make every write of this scope visible atomically
    async fn commit(self) -> AppResult<()>;
}

/// Postgres-backed conflict store
#[derive(Clone)]
pub struct PgConflictStore {
    pool: PgPool,
}

impl PgConflictStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Detection scope holding an open Postgres transaction
pub struct PgDetectionScope {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ConflictStore for PgConflictStore {
    type Scope = PgDetectionScope;

    async fn begin_detection(&self, contest_id: &Uuid) -> AppResult<PgDetectionScope> {
        let mut tx = self.pool.begin().await?;
        ConflictRepository::lock_detection(&mut *tx, contest_id).await?;
        Ok(PgDetectionScope { tx })
    }

    async fn contest_exists(&self, contest_id: &Uuid) -> AppResult<bool> {
        ContestRepository::exists(&self.pool, contest_id).await
    }

    async fn list_conflicts(&self, contest_id: &Uuid) -> AppResult<Vec<ContestConflict>> {
        ConflictRepository::list_for_contest(&self.pool, contest_id).await
    }

    async fn resolve_conflict(
        &self,
        conflict_id: &Uuid,
        resolution: Option<&str>,
    ) -> AppResult<Option<ContestConflict>> {
        ConflictRepository::resolve(&self.pool, conflict_id, resolution).await
    }
}

#[async_trait]
impl DetectionScope for PgDetectionScope {
    async fn get_contest(&mut self, id: &Uuid) -> AppResult<Option<Contest>> {
        ContestRepository::find_by_id(&mut *self.tx, id).await
    }

    async fn list_candidate_contests(&mut self, exclude_id: &Uuid) -> AppResult<Vec<Contest>> {
        ContestRepository::list_candidates(&mut *self.tx, exclude_id).await
    }

    async fn list_venues(&mut self, contest_ids: &[Uuid]) -> AppResult<Vec<Venue>> {
        VenueRepository::list_for_contests(&mut *self.tx, contest_ids).await
    }

    async fn delete_unresolved(&mut self, contest_id: &Uuid) -> AppResult<u64> {
        ConflictRepository::delete_unresolved(&mut *self.tx, contest_id).await
    }

    async fn insert_conflicts(
        &mut self,
        contest_id: &Uuid,
        conflicts: &[DetectedConflict],
    ) -> AppResult<Vec<ContestConflict>> {
        let mut stored = Vec::with_capacity(conflicts.len());
        for conflict in conflicts {
            stored.push(ConflictRepository::insert(&mut *self.tx, contest_id, conflict).await?);
        }
        Ok(stored)
    }

    async fn insert_notifications(&mut self, notifications: &[NewNotification]) -> AppResult<()> {
        for notification in notifications {
            NotificationRepository::insert(&mut *self.tx, notification).await?;
        }
        Ok(())
    }

    async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        db::test_db::{day, fresh_database, insert_contest, insert_venue},
        models::ContestStatus,
        services::ConflictService,
    };

    /// Two overlapping contests sharing a hall: detecting the first yields a
    /// time conflict and a venue conflict.
    async fn overlapping_pair(pool: &PgPool) -> (Contest, Contest) {
        let first = insert_contest(
            pool,
            "Spring Cup",
            Some((day(6, 1), day(6, 3))),
            ContestStatus::Published,
        )
        .await;
        let second = insert_contest(
            pool,
            "Summer Open",
            Some((day(6, 2), day(6, 4))),
            ContestStatus::Draft,
        )
        .await;
        insert_venue(pool, &first.id, "Hall A").await;
        insert_venue(pool, &second.id, "Hall A").await;
        (first, second)
    }

    #[tokio::test]
    async fn test_redetection_replaces_unresolved() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, _) = overlapping_pair(&pool).await;

        let report = ConflictService::detect_conflicts(&store, &first.id, None)
            .await
            .unwrap();
        assert_eq!(report.total_conflicts(), 2);
        assert_eq!(report.replaced, 0);

        let again = ConflictService::detect_conflicts(&store, &first.id, None)
            .await
            .unwrap();
        assert_eq!(again.total_conflicts(), 2);
        assert_eq!(again.replaced, 2);

        let stored = store.list_conflicts(&first.id).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|c| !c.is_resolved));
    }

    #[tokio::test]
    async fn test_resolved_conflicts_survive_redetection() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, second) = overlapping_pair(&pool).await;

        ConflictService::detect_conflicts(&store, &first.id, None)
            .await
            .unwrap();
        let stored = store.list_conflicts(&first.id).await.unwrap();
        let resolved = ConflictService::resolve_conflict(&store, &stored[0].id, Some("Moved"))
            .await
            .unwrap();
        assert!(resolved.is_resolved);
        assert!(resolved.resolved_at.is_some());

        ConflictService::detect_conflicts(&store, &first.id, None)
            .await
            .unwrap();

        let stored = store.list_conflicts(&first.id).await.unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored.iter().filter(|c| c.is_resolved).count(), 1);
        assert!(stored.iter().all(|c| c.conflict_with_id == Some(second.id)));
        assert_eq!(
            ConflictRepository::count_unresolved(&pool, &first.id).await.unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_dropped_scope_rolls_back() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, _) = overlapping_pair(&pool).await;
        ConflictService::detect_conflicts(&store, &first.id, None)
            .await
            .unwrap();

        let mut scope = store.begin_detection(&first.id).await.unwrap();
        assert_eq!(scope.delete_unresolved(&first.id).await.unwrap(), 2);
        drop(scope);

        assert_eq!(store.list_conflicts(&first.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_detection_scopes_are_serialized_per_contest() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, second) = overlapping_pair(&pool).await;

        let held = store.begin_detection(&first.id).await.unwrap();

        let waiter = {
            let store = store.clone();
            let id = first.id;
            tokio::spawn(async move { store.begin_detection(&id).await.map(drop) })
        };
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!waiter.is_finished());

        // A different contest is not blocked
        let other = store.begin_detection(&second.id).await.unwrap();
        drop(other);

        drop(held);
        let joined = tokio::time::timeout(Duration::from_secs(10), waiter)
            .await
            .unwrap()
            .unwrap();
        assert!(joined.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_detection_matches_single_run() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, _) = overlapping_pair(&pool).await;

        let (a, b) = tokio::join!(
            ConflictService::detect_conflicts(&store, &first.id, None),
            ConflictService::detect_conflicts(&store, &first.id, None),
        );
        assert!(a.is_ok());
        assert!(b.is_ok());

        assert_eq!(store.list_conflicts(&first.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_detection_writes_alert_notifications() {
        let Some(pool) = fresh_database().await else {
            return;
        };
        let store = PgConflictStore::new(pool.clone());
        let (first, _) = overlapping_pair(&pool).await;

        ConflictService::detect_conflicts(&store, &first.id, Some("admin"))
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM contest_notifications
            WHERE contest_id = $1 AND notification_type = 'conflict_alert' AND recipient = 'admin'
            "#,
        )
        .bind(first.id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 2);
    }
}
