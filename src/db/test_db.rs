//! Postgres databases for tests
//!
//! One container is started lazily and shared by every test; each test gets
//! its own freshly migrated database inside it. Set `TEST_DATABASE_URL` to use
//! an existing server instead. Without either, `fresh_database` returns `None`
//! and the calling test returns early.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{
    db::repositories::{ContestRepository, NewContest, VenueRepository},
    models::{Contest, ContestStatus, Incentives, Venue},
};

static SERVER: OnceCell<Option<Server>> = OnceCell::const_new();

struct Server {
    admin_url: String,
    _container: Option<ContainerAsync<Postgres>>,
}

async fn server() -> Option<&'static Server> {
    SERVER
        .get_or_init(|| async {
            if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
                return Some(Server {
                    admin_url: url,
                    _container: None,
                });
            }

            let container = match Postgres::default()
                .with_user("contest")
                .with_password("contest_test")
                .with_db_name("contest_test")
                .start()
                .await
            {
                Ok(container) => container,
                Err(e) => {
                    eprintln!("skipping Postgres tests, container failed to start: {}", e);
                    return None;
                }
            };

            let host = container.get_host().await.ok()?;
            let port = container.get_host_port_ipv4(5432).await.ok()?;
            Some(Server {
                admin_url: format!(
                    "postgres://contest:contest_test@{}:{}/contest_test",
                    host, port
                ),
                _container: Some(container),
            })
        })
        .await
        .as_ref()
}

/// Create an empty, migrated database and connect a pool to it
pub async fn fresh_database() -> Option<PgPool> {
    let server = server().await?;
    let admin_options: PgConnectOptions = server
        .admin_url
        .parse()
        .expect("Invalid test database URL");

    let name = format!("test_{}", Uuid::new_v4().simple());
    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(admin_options.clone())
        .await
        .expect("Failed to connect to test database server");
    sqlx::query(&format!("CREATE DATABASE \"{}\"", name))
        .execute(&admin)
        .await
        .expect("Failed to create test database");
    admin.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(admin_options.database(&name))
        .await
        .expect("Failed to connect to test database");
    super::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Midnight UTC of a day in 2025
pub fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, 0, 0, 0).unwrap()
}

/// Insert a contest with an optional schedule and move it to `status`
pub async fn insert_contest(
    pool: &PgPool,
    name: &str,
    schedule: Option<(DateTime<Utc>, DateTime<Utc>)>,
    status: ContestStatus,
) -> Contest {
    let contest = ContestRepository::create(
        pool,
        &NewContest {
            name,
            contest_type: "programming",
            start_date: schedule.map(|(start, _)| start),
            end_date: schedule.map(|(_, end)| end),
            registration_start: None,
            registration_end: None,
            location: None,
            online_mode: false,
            rules: None,
            incentives: &Incentives::default(),
        },
    )
    .await
    .unwrap();

    if status == ContestStatus::Draft {
        return contest;
    }
    ContestRepository::update_status(pool, &contest.id, status)
        .await
        .unwrap()
        .unwrap()
}

pub async fn insert_venue(pool: &PgPool, contest_id: &Uuid, name: &str) -> Venue {
    VenueRepository::create(pool, contest_id, name, Some(100), None, &[])
        .await
        .unwrap()
}
