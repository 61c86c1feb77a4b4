//! Conflict detection and resolution service

use uuid::Uuid;

use crate::{
    db::{ConflictStore, DetectionScope},
    detection::ConflictDetector,
    error::{AppError, AppResult},
    models::{ContestConflict, ContestWithVenues, DetectedConflict, NewNotification},
};

/// Outcome of one detection run
#[derive(Debug, Clone)]
pub struct DetectionReport {
    pub contest_id: Uuid,
    pub conflicts: Vec<DetectedConflict>,
    /// Unresolved conflicts replaced by this run
    pub replaced: u64,
}

impl DetectionReport {
    pub fn total_conflicts(&self) -> usize {
        self.conflicts.len()
    }
}

/// Conflict service for business logic
pub struct ConflictService;

impl ConflictService {
    /// Detect conflicts for a contest and replace its unresolved conflicts.
    ///
    /// Loading, matching, replacing and notifying all happen in one detection
    /// scope; any failure leaves the previous conflict set in place.
    pub async fn detect_conflicts<S: ConflictStore>(
        store: &S,
        contest_id: &Uuid,
        recipient: Option<&str>,
    ) -> AppResult<DetectionReport> {
        let mut scope = store.begin_detection(contest_id).await?;

        let contest = scope
            .get_contest(contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let candidates = if contest.schedule().is_some() {
            scope.list_candidate_contests(contest_id).await?
        } else {
            Vec::new()
        };

        let mut contest_ids: Vec<Uuid> = candidates.iter().map(|c| c.id).collect();
        contest_ids.push(contest.id);
        let venues = scope.list_venues(&contest_ids).await?;

        let (target_venues, candidate_venues): (Vec<_>, Vec<_>) = venues
            .into_iter()
            .partition(|venue| venue.contest_id == contest.id);
        let candidates = ContestWithVenues::group(candidates, candidate_venues);
        let target = ContestWithVenues {
            contest,
            venues: target_venues,
        };

        let detected = ConflictDetector::new(&target).detect(&candidates);

        let replaced = scope.delete_unresolved(contest_id).await?;
        let stored = scope.insert_conflicts(contest_id, &detected).await?;

        let notifications: Vec<NewNotification> = stored
            .iter()
            .map(|conflict| NewNotification::conflict_alert(conflict, recipient))
            .collect();
        scope.insert_notifications(&notifications).await?;

        scope.commit().await?;

        tracing::info!(
            contest_id = %contest_id,
            total_conflicts = detected.len(),
            replaced,
            "Conflict detection completed"
        );

        Ok(DetectionReport {
            contest_id: *contest_id,
            conflicts: detected,
            replaced,
        })
    }

    /// List persisted conflicts of a contest
    pub async fn list_conflicts<S: ConflictStore>(
        store: &S,
        contest_id: &Uuid,
    ) -> AppResult<Vec<ContestConflict>> {
        if !store.contest_exists(contest_id).await? {
            return Err(AppError::NotFound("Contest not found".to_string()));
        }

        store.list_conflicts(contest_id).await
    }

    /// Mark a conflict resolved
    pub async fn resolve_conflict<S: ConflictStore>(
        store: &S,
        conflict_id: &Uuid,
        resolution: Option<&str>,
    ) -> AppResult<ContestConflict> {
        let conflict = store
            .resolve_conflict(conflict_id, resolution)
            .await?
            .ok_or_else(|| AppError::NotFound("Conflict not found".to_string()))?;

        tracing::info!(
            conflict_id = %conflict_id,
            contest_id = %conflict.contest_id,
            "Conflict resolved"
        );

        Ok(conflict)
    }
}
