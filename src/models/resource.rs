//! Contest resource configuration models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Overall budget of a contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestBudget {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub total: Decimal,
}

/// One line of a contest budget breakdown
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub name: String,
    pub amount: Decimal,
}

/// Budget total together with its breakdown
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    pub total: Decimal,
    pub categories: Vec<BudgetCategory>,
}

/// Role a staff member plays in a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PersonnelRole {
    Organizer,
    Judge,
    Volunteer,
}

/// Staff member assigned to a contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestPersonnel {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub role: PersonnelRole,
    pub name: String,
    pub contact: Option<String>,
}

/// Availability of a piece of equipment
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    #[default]
    Available,
    Reserved,
    Maintenance,
}

/// Equipment reserved for a contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestEquipment {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub status: EquipmentStatus,
}

/// Consumable material for a contest; quantity and unit are free text
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestMaterial {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

/// Everything configured for a contest besides its venues
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContestResources {
    pub budget: Option<BudgetSummary>,
    pub personnel: Vec<ContestPersonnel>,
    pub equipment: Vec<ContestEquipment>,
    pub materials: Vec<ContestMaterial>,
}
