//! Contest service

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    db::{
        PgConflictStore,
        repositories::{
            ConflictRepository, ContestRepository, NewContest, ResourceRepository,
            VenueRepository,
        },
    },
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, IncentivesRequest, ResourceConfigRequest},
        response::{ContestCreatedResponse, ContestDetailResponse},
    },
    handlers::conflicts::response::DetectConflictsResponse,
    models::{BudgetSummary, Contest, ContestResources, ContestStatus, Incentives, PersonnelRole},
    services::ConflictService,
    utils::{
        pagination::page_bounds,
        validation::{
            normalize_facilities, sanitize_optional, sanitize_string, validate_budget,
            validate_not_blank, validate_window,
        },
    },
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a contest with its venues and resources, then run conflict
    /// detection for it.
    ///
    /// The contest is committed before detection starts, so a failed detection
    /// run is logged and reported as a missing conflict check rather than
    /// undoing the creation.
    pub async fn create_contest(
        pool: &PgPool,
        alert_recipient: Option<&str>,
        payload: CreateContestRequest,
    ) -> AppResult<ContestCreatedResponse> {
        validate_window(payload.start_date, payload.end_date)
            .map_err(|e| AppError::Validation(format!("Contest schedule: {}", e)))?;
        validate_window(payload.registration_start, payload.registration_end)
            .map_err(|e| AppError::Validation(format!("Registration window: {}", e)))?;

        let name = sanitize_string(&payload.name);
        validate_not_blank(&name)
            .map_err(|e| AppError::Validation(format!("Contest name {}", e)))?;
        let contest_type = sanitize_string(&payload.contest_type);
        validate_not_blank(&contest_type)
            .map_err(|e| AppError::Validation(format!("Contest type {}", e)))?;

        let venue_names = payload
            .venues
            .iter()
            .map(|venue| required_name("Venue", &venue.name))
            .collect::<AppResult<Vec<String>>>()?;

        if let Some(budget) = &payload.resources.budget {
            let amounts: Vec<_> = budget.categories.iter().map(|c| c.amount).collect();
            validate_budget(budget.total, &amounts)
                .map_err(|e| AppError::Validation(format!("Budget: {}", e)))?;
        }

        let incentives = incentives(&payload.incentives);

        let mut tx = pool.begin().await?;

        let contest = ContestRepository::create(
            &mut *tx,
            &NewContest {
                name: &name,
                contest_type: &contest_type,
                start_date: payload.start_date,
                end_date: payload.end_date,
                registration_start: payload.registration_start,
                registration_end: payload.registration_end,
                location: payload.location.as_deref(),
                online_mode: payload.online_mode,
                rules: payload.rules.as_deref(),
                incentives: &incentives,
            },
        )
        .await?;

        let mut venues = Vec::with_capacity(payload.venues.len());
        for (venue, venue_name) in payload.venues.iter().zip(&venue_names) {
            venues.push(
                VenueRepository::create(
                    &mut *tx,
                    &contest.id,
                    venue_name,
                    venue.capacity,
                    venue.address.as_deref().map(str::trim),
                    &normalize_facilities(&venue.facilities),
                )
                .await?,
            );
        }

        let resources = insert_resources(&mut *tx, &contest.id, &payload.resources).await?;

        tx.commit().await?;

        tracing::info!(
            contest_id = %contest.id,
            venues = venues.len(),
            personnel = resources.personnel.len(),
            equipment = resources.equipment.len(),
            materials = resources.materials.len(),
            "Contest created"
        );

        let store = PgConflictStore::new(pool.clone());
        let conflict_check =
            match ConflictService::detect_conflicts(&store, &contest.id, alert_recipient).await {
                Ok(report) => Some(DetectConflictsResponse::from(report)),
                Err(e) => {
                    tracing::warn!(
                        contest_id = %contest.id,
                        error = %e,
                        "Conflict detection after contest creation failed"
                    );
                    None
                }
            };

        Ok(ContestCreatedResponse {
            contest,
            venues,
            resources,
            conflict_check,
        })
    }

    /// Get contest by ID with its venues and resources
    pub async fn get_contest(pool: &PgPool, id: &Uuid) -> AppResult<ContestDetailResponse> {
        let contest = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        let (venues, resources, unresolved_conflicts) = futures::try_join!(
            VenueRepository::list_for_contest(pool, id),
            ResourceRepository::load(pool, id),
            ConflictRepository::count_unresolved(pool, id),
        )?;

        Ok(ContestDetailResponse {
            contest,
            venues,
            resources,
            unresolved_conflicts,
        })
    }

    /// List contests with pagination
    pub async fn list_contests(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        status: Option<ContestStatus>,
    ) -> AppResult<(Vec<Contest>, i64)> {
        let (offset, limit) = page_bounds(page, per_page);
        ContestRepository::list(pool, offset, limit, status).await
    }
}

fn required_name(label: &str, value: &str) -> AppResult<String> {
    let name = sanitize_string(value);
    validate_not_blank(&name)
        .map(|_| name)
        .map_err(|e| AppError::Validation(format!("{} name {}", label, e)))
}

fn incentives(request: &IncentivesRequest) -> Incentives {
    Incentives {
        first_prize: sanitize_optional(request.first_prize.as_deref()),
        second_prize: sanitize_optional(request.second_prize.as_deref()),
        third_prize: sanitize_optional(request.third_prize.as_deref()),
        certificate: request.certificate,
        scholarship: sanitize_optional(request.scholarship.as_deref()),
    }
}

/// Write the resource configuration of a freshly created contest
async fn insert_resources(
    conn: &mut PgConnection,
    contest_id: &Uuid,
    request: &ResourceConfigRequest,
) -> AppResult<ContestResources> {
    let mut resources = ContestResources::default();

    if let Some(total) = request.budget.as_ref().and_then(|b| b.total) {
        let budget = ResourceRepository::set_budget(&mut *conn, contest_id, total).await?;
        let mut categories = Vec::new();
        for category in request.budget.iter().flat_map(|b| &b.categories) {
            let name = required_name("Budget category", &category.name)?;
            categories.push(
                ResourceRepository::add_budget_category(
                    &mut *conn,
                    contest_id,
                    &name,
                    category.amount,
                )
                .await?,
            );
        }
        resources.budget = Some(BudgetSummary {
            total: budget.total,
            categories,
        });
    }

    let staff = &request.personnel;
    let roles = [
        (PersonnelRole::Organizer, &staff.organizers),
        (PersonnelRole::Judge, &staff.judges),
        (PersonnelRole::Volunteer, &staff.volunteers),
    ];
    for (role, people) in roles {
        for person in people {
            let name = required_name("Staff", &person.name)?;
            let contact = sanitize_optional(person.contact.as_deref());
            resources.personnel.push(
                ResourceRepository::add_personnel(
                    &mut *conn,
                    contest_id,
                    role,
                    &name,
                    contact.as_deref(),
                )
                .await?,
            );
        }
    }

    for item in &request.equipment {
        let name = required_name("Equipment", &item.name)?;
        resources.equipment.push(
            ResourceRepository::add_equipment(
                &mut *conn,
                contest_id,
                &name,
                item.quantity,
                item.status,
            )
            .await?,
        );
    }

    for item in &request.materials {
        let name = required_name("Material", &item.name)?;
        let quantity = sanitize_optional(item.quantity.as_deref());
        let unit = sanitize_optional(item.unit.as_deref());
        resources.materials.push(
            ResourceRepository::add_material(
                &mut *conn,
                contest_id,
                &name,
                quantity.as_deref(),
                unit.as_deref(),
            )
            .await?,
        );
    }

    Ok(resources)
}
