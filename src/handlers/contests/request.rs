//! Contest request DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{
        MAX_CONTACT_LENGTH, MAX_CONTEST_NAME_LENGTH, MAX_CONTEST_TYPE_LENGTH, MAX_LOCATION_LENGTH,
        MAX_MATERIAL_QUANTITY_LENGTH, MAX_MATERIAL_UNIT_LENGTH, MAX_PRIZE_LENGTH,
        MAX_RESOURCE_ITEMS, MAX_RESOURCE_NAME_LENGTH, MAX_RULES_LENGTH, MAX_VENUE_ADDRESS_LENGTH,
        MAX_VENUE_NAME_LENGTH, MAX_VENUES_PER_CONTEST,
    },
    models::{ContestStatus, EquipmentStatus},
};

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    /// Free-form category, e.g. "programming" or "math"
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = MAX_CONTEST_TYPE_LENGTH))]
    pub contest_type: String,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    #[serde(default)]
    pub online_mode: bool,

    #[validate(length(max = MAX_RULES_LENGTH))]
    pub rules: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub incentives: IncentivesRequest,

    #[serde(default)]
    #[validate(length(max = MAX_VENUES_PER_CONTEST), nested)]
    pub venues: Vec<VenueRequest>,

    #[serde(default)]
    #[validate(nested)]
    pub resources: ResourceConfigRequest,
}

/// Venue booked by a new contest
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct VenueRequest {
    #[validate(length(min = 1, max = MAX_VENUE_NAME_LENGTH))]
    pub name: String,

    #[validate(range(min = 0))]
    pub capacity: Option<i32>,

    #[validate(length(max = MAX_VENUE_ADDRESS_LENGTH))]
    pub address: Option<String>,

    #[serde(default)]
    pub facilities: Vec<String>,
}

/// Prizes offered by a new contest
#[derive(Debug, Default, Deserialize, Validate)]
pub struct IncentivesRequest {
    #[validate(length(max = MAX_PRIZE_LENGTH))]
    pub first_prize: Option<String>,

    #[validate(length(max = MAX_PRIZE_LENGTH))]
    pub second_prize: Option<String>,

    #[validate(length(max = MAX_PRIZE_LENGTH))]
    pub third_prize: Option<String>,

    #[serde(default)]
    pub certificate: bool,

    #[validate(length(max = MAX_PRIZE_LENGTH))]
    pub scholarship: Option<String>,
}

/// Budget, staff, equipment and materials of a new contest
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ResourceConfigRequest {
    #[validate(nested)]
    pub budget: Option<BudgetRequest>,

    #[serde(default)]
    #[validate(nested)]
    pub personnel: PersonnelRequest,

    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub equipment: Vec<EquipmentRequest>,

    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub materials: Vec<MaterialRequest>,
}

/// Budget total and its breakdown. Amounts accept JSON numbers or strings
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BudgetRequest {
    pub total: Option<Decimal>,

    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub categories: Vec<BudgetCategoryRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BudgetCategoryRequest {
    #[validate(length(min = 1, max = MAX_RESOURCE_NAME_LENGTH))]
    pub name: String,

    pub amount: Decimal,
}

/// Staff grouped by role
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PersonnelRequest {
    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub organizers: Vec<PersonRequest>,

    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub judges: Vec<PersonRequest>,

    #[serde(default)]
    #[validate(length(max = MAX_RESOURCE_ITEMS), nested)]
    pub volunteers: Vec<PersonRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PersonRequest {
    #[validate(length(min = 1, max = MAX_RESOURCE_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_CONTACT_LENGTH))]
    pub contact: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct EquipmentRequest {
    #[validate(length(min = 1, max = MAX_RESOURCE_NAME_LENGTH))]
    pub name: String,

    #[serde(default = "default_equipment_quantity")]
    #[validate(range(min = 0))]
    pub quantity: i32,

    #[serde(default)]
    pub status: EquipmentStatus,
}

fn default_equipment_quantity() -> i32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MaterialRequest {
    #[validate(length(min = 1, max = MAX_RESOURCE_NAME_LENGTH))]
    pub name: String,

    /// Free text such as "200" or "2-3"
    #[validate(length(max = MAX_MATERIAL_QUANTITY_LENGTH))]
    pub quantity: Option<String>,

    #[validate(length(max = MAX_MATERIAL_UNIT_LENGTH))]
    pub unit: Option<String>,
}

/// List contests query parameters
#[derive(Debug, Deserialize)]
pub struct ListContestsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<ContestStatus>,
}
