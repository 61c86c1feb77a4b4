//! Contest resource repository
//!
//! Budget, personnel, equipment and materials belong to one contest and are
//! only written while that contest is being created.

use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        BudgetCategory, BudgetSummary, ContestBudget, ContestEquipment, ContestMaterial,
        ContestPersonnel, ContestResources, EquipmentStatus, PersonnelRole,
    },
};

/// Repository for contest resource configuration
pub struct ResourceRepository;

impl ResourceRepository {
    /// Record the overall budget of a contest
    pub async fn set_budget<'e, E>(
        executor: E,
        contest_id: &Uuid,
        total: Decimal,
    ) -> AppResult<ContestBudget>
    where
        E: PgExecutor<'e>,
    {
        let budget = sqlx::query_as::<_, ContestBudget>(
            r#"
            INSERT INTO contest_budgets (contest_id, total)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(total)
        .fetch_one(executor)
        .await?;

        Ok(budget)
    }

    /// Add one line to the budget breakdown
    pub async fn add_budget_category<'e, E>(
        executor: E,
        contest_id: &Uuid,
        name: &str,
        amount: Decimal,
    ) -> AppResult<BudgetCategory>
    where
        E: PgExecutor<'e>,
    {
        let category = sqlx::query_as::<_, BudgetCategory>(
            r#"
            INSERT INTO contest_budget_categories (contest_id, name, amount)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(name)
        .bind(amount)
        .fetch_one(executor)
        .await?;

        Ok(category)
    }

    /// Assign a staff member
    pub async fn add_personnel<'e, E>(
        executor: E,
        contest_id: &Uuid,
        role: PersonnelRole,
        name: &str,
        contact: Option<&str>,
    ) -> AppResult<ContestPersonnel>
    where
        E: PgExecutor<'e>,
    {
        let person = sqlx::query_as::<_, ContestPersonnel>(
            r#"
            INSERT INTO contest_personnel (contest_id, role, name, contact)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(role)
        .bind(name)
        .bind(contact)
        .fetch_one(executor)
        .await?;

        Ok(person)
    }

    /// Reserve equipment
    pub async fn add_equipment<'e, E>(
        executor: E,
        contest_id: &Uuid,
        name: &str,
        quantity: i32,
        status: EquipmentStatus,
    ) -> AppResult<ContestEquipment>
    where
        E: PgExecutor<'e>,
    {
        let equipment = sqlx::query_as::<_, ContestEquipment>(
            r#"
            INSERT INTO contest_equipment (contest_id, name, quantity, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(name)
        .bind(quantity)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(equipment)
    }

    /// Add a consumable material
    pub async fn add_material<'e, E>(
        executor: E,
        contest_id: &Uuid,
        name: &str,
        quantity: Option<&str>,
        unit: Option<&str>,
    ) -> AppResult<ContestMaterial>
    where
        E: PgExecutor<'e>,
    {
        let material = sqlx::query_as::<_, ContestMaterial>(
            r#"
            INSERT INTO contest_materials (contest_id, name, quantity, unit)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(name)
        .bind(quantity)
        .bind(unit)
        .fetch_one(executor)
        .await?;

        Ok(material)
    }

    /// Load the full resource configuration of a contest
    pub async fn load(pool: &PgPool, contest_id: &Uuid) -> AppResult<ContestResources> {
        let budget = sqlx::query_as::<_, ContestBudget>(
            r#"SELECT * FROM contest_budgets WHERE contest_id = $1"#,
        )
        .bind(contest_id)
        .fetch_optional(pool);

        let categories = sqlx::query_as::<_, BudgetCategory>(
            r#"
            SELECT * FROM contest_budget_categories
            WHERE contest_id = $1
            ORDER BY name ASC, id ASC
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool);

        let personnel = sqlx::query_as::<_, ContestPersonnel>(
            r#"
            SELECT * FROM contest_personnel
            WHERE contest_id = $1
            ORDER BY
                CASE role WHEN 'organizer' THEN 0 WHEN 'judge' THEN 1 ELSE 2 END,
                name ASC,
                id ASC
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool);

        let equipment = sqlx::query_as::<_, ContestEquipment>(
            r#"SELECT * FROM contest_equipment WHERE contest_id = $1 ORDER BY name ASC, id ASC"#,
        )
        .bind(contest_id)
        .fetch_all(pool);

        let materials = sqlx::query_as::<_, ContestMaterial>(
            r#"SELECT * FROM contest_materials WHERE contest_id = $1 ORDER BY name ASC, id ASC"#,
        )
        .bind(contest_id)
        .fetch_all(pool);

        let (budget, categories, personnel, equipment, materials) =
            futures::try_join!(budget, categories, personnel, equipment, materials)?;

        Ok(ContestResources {
            budget: budget.map(|b| BudgetSummary {
                total: b.total,
                categories,
            }),
            personnel,
            equipment,
            materials,
        })
    }
}
