//! Database module
//!
//! This module handles database connections, migrations, repositories and the
//! conflict store used by detection.

pub mod connection;
#[cfg(test)]
pub mod memory;
pub mod repositories;
pub mod store;
#[cfg(test)]
pub mod test_db;

use sqlx::PgPool;

pub use connection::*;
pub use store::{ConflictStore, DetectionScope, PgConflictStore, PgDetectionScope};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
