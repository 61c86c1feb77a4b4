//! In-memory conflict store for service tests
//!
//! A scope holds the store-wide lock for its whole lifetime and stages its
//! writes on a copy of the data; `commit` swaps the copy in. Dropping a scope
//! leaves the committed data untouched.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::{
    db::store::{ConflictStore, DetectionScope},
    error::{AppError, AppResult},
    models::{
        Contest, ContestConflict, ContestStatus, DetectedConflict, NewNotification, Notification,
        Venue,
    },
};

/// Committed data
#[derive(Debug, Clone, Default)]
pub struct MemoryData {
    pub contests: Vec<Contest>,
    pub venues: Vec<Venue>,
    pub conflicts: Vec<ContestConflict>,
    pub notifications: Vec<Notification>,
}

#[derive(Clone, Default)]
pub struct MemoryConflictStore {
    data: Arc<Mutex<MemoryData>>,
    fail_notifications: Arc<AtomicBool>,
}

impl MemoryConflictStore {
    pub fn new(contests: Vec<Contest>, venues: Vec<Venue>) -> Self {
        Self {
            data: Arc::new(Mutex::new(MemoryData {
                contests,
                venues,
                ..MemoryData::default()
            })),
            fail_notifications: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every later notification insert fail
    pub fn fail_notification_inserts(&self, fail: bool) {
        self.fail_notifications.store(fail, Ordering::SeqCst);
    }

    /// Change a contest's status outside of any detection scope
    pub async fn set_contest_status(&self, contest_id: &Uuid, status: ContestStatus) {
        let mut data = self.data.lock().await;
        if let Some(contest) = data.contests.iter_mut().find(|c| c.id == *contest_id) {
            contest.status = status;
        }
    }

    /// Copy of the committed data
    pub async fn snapshot(&self) -> MemoryData {
        self.data.lock().await.clone()
    }
}

pub struct MemoryScope {
    guard: OwnedMutexGuard<MemoryData>,
    staged: MemoryData,
    fail_notifications: bool,
}

#[async_trait]
impl ConflictStore for MemoryConflictStore {
    type Scope = MemoryScope;

    async fn begin_detection(&self, _contest_id: &Uuid) -> AppResult<MemoryScope> {
        let guard = self.data.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryScope {
            guard,
            staged,
            fail_notifications: self.fail_notifications.load(Ordering::SeqCst),
        })
    }

    async fn contest_exists(&self, contest_id: &Uuid) -> AppResult<bool> {
        let data = self.data.lock().await;
        Ok(data.contests.iter().any(|c| c.id == *contest_id))
    }

    async fn list_conflicts(&self, contest_id: &Uuid) -> AppResult<Vec<ContestConflict>> {
        let data = self.data.lock().await;
        let mut conflicts: Vec<ContestConflict> = data
            .conflicts
            .iter()
            .filter(|c| c.contest_id == *contest_id)
            .cloned()
            .collect();
        conflicts.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then(b.detected_at.cmp(&a.detected_at))
        });
        Ok(conflicts)
    }

    async fn resolve_conflict(
        &self,
        conflict_id: &Uuid,
        resolution: Option<&str>,
    ) -> AppResult<Option<ContestConflict>> {
        let mut data = self.data.lock().await;
        let Some(conflict) = data.conflicts.iter_mut().find(|c| c.id == *conflict_id) else {
            return Ok(None);
        };

        conflict.is_resolved = true;
        conflict.resolution = resolution.map(str::to_string);
        conflict.resolved_at = Some(Utc::now());
        Ok(Some(conflict.clone()))
    }
}

#[async_trait]
impl DetectionScope for MemoryScope {
    async fn get_contest(&mut self, id: &Uuid) -> AppResult<Option<Contest>> {
        Ok(self.staged.contests.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_candidate_contests(&mut self, exclude_id: &Uuid) -> AppResult<Vec<Contest>> {
        let mut candidates: Vec<Contest> = self
            .staged
            .contests
            .iter()
            .filter(|c| c.is_candidate_for(exclude_id))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(candidates)
    }

    async fn list_venues(&mut self, contest_ids: &[Uuid]) -> AppResult<Vec<Venue>> {
        Ok(self
            .staged
            .venues
            .iter()
            .filter(|v| contest_ids.contains(&v.contest_id))
            .cloned()
            .collect())
    }

    async fn delete_unresolved(&mut self, contest_id: &Uuid) -> AppResult<u64> {
        let before = self.staged.conflicts.len();
        self.staged
            .conflicts
            .retain(|c| c.contest_id != *contest_id || c.is_resolved);
        Ok((before - self.staged.conflicts.len()) as u64)
    }

    async fn insert_conflicts(
        &mut self,
        contest_id: &Uuid,
        conflicts: &[DetectedConflict],
    ) -> AppResult<Vec<ContestConflict>> {
        let stored: Vec<ContestConflict> = conflicts
            .iter()
            .map(|c| ContestConflict {
                id: Uuid::new_v4(),
                contest_id: *contest_id,
                conflict_type: c.conflict_type,
                conflict_with_id: Some(c.with_id),
                description: c.description.clone(),
                severity: c.severity,
                is_resolved: false,
                resolution: None,
                detected_at: Utc::now(),
                resolved_at: None,
            })
            .collect();
        self.staged.conflicts.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn insert_notifications(&mut self, notifications: &[NewNotification]) -> AppResult<()> {
        if self.fail_notifications {
            return Err(AppError::Database("notification insert failed".to_string()));
        }

        self.staged
            .notifications
            .extend(notifications.iter().map(|n| Notification {
                id: Uuid::new_v4(),
                contest_id: n.contest_id,
                notification_type: n.notification_type,
                title: n.title.clone(),
                content: n.content.clone(),
                recipient: n.recipient.clone(),
                is_read: false,
                created_at: Utc::now(),
            }));
        Ok(())
    }

    async fn commit(mut self) -> AppResult<()> {
        *self.guard = std::mem::take(&mut self.staged);
        Ok(())
    }
}
