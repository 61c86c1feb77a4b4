//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, db::PgConflictStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, config }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Conflict store backed by the shared pool
    pub fn conflict_store(&self) -> PgConflictStore {
        PgConflictStore::new(self.inner.db.clone())
    }

    /// Recipient stamped on conflict alerts, if configured
    pub fn alert_recipient(&self) -> Option<&str> {
        self.inner.config.notifications.default_recipient.as_deref()
    }
}
