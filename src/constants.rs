//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when neither RUST_LOG nor config provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Largest accepted request body
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a pooled connection
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// CONFLICT DETECTION
// =============================================================================

/// Title used for every conflict alert notification
pub const CONFLICT_ALERT_TITLE: &str = "Conflict detected";

/// Title used for review result notifications
pub const REVIEW_RESULT_TITLE: &str = "Contest review completed";

/// Timestamp layout used in human-readable conflict descriptions
pub const DESCRIPTION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// =============================================================================
// USER ACCOUNTS
// =============================================================================

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 50;

/// School name maximum length
pub const MAX_SCHOOL_LENGTH: u64 = 100;

/// Student number maximum length
pub const MAX_STUDENT_ID_LENGTH: u64 = 50;

/// Phone number maximum length
pub const MAX_PHONE_LENGTH: u64 = 20;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum contest name length
pub const MAX_CONTEST_NAME_LENGTH: u64 = 255;

/// Maximum contest type length
pub const MAX_CONTEST_TYPE_LENGTH: u64 = 50;

/// Maximum contest location length
pub const MAX_LOCATION_LENGTH: u64 = 500;

/// Maximum contest rules length
pub const MAX_RULES_LENGTH: u64 = 65535;

/// Maximum venue name length
pub const MAX_VENUE_NAME_LENGTH: u64 = 255;

/// Maximum venue address length
pub const MAX_VENUE_ADDRESS_LENGTH: u64 = 500;

/// Maximum number of venues attached to one contest
pub const MAX_VENUES_PER_CONTEST: u64 = 50;

/// Maximum prize or scholarship description length
pub const MAX_PRIZE_LENGTH: u64 = 255;

/// Maximum length of a budget category, staff, equipment or material name
pub const MAX_RESOURCE_NAME_LENGTH: u64 = 100;

/// Maximum staff contact length
pub const MAX_CONTACT_LENGTH: u64 = 100;

/// Maximum free-text material quantity length
pub const MAX_MATERIAL_QUANTITY_LENGTH: u64 = 50;

/// Maximum material unit length
pub const MAX_MATERIAL_UNIT_LENGTH: u64 = 20;

/// Maximum entries in any one resource list of a contest
pub const MAX_RESOURCE_ITEMS: u64 = 200;

/// Maximum reviewer name length
pub const MAX_REVIEWER_NAME_LENGTH: u64 = 100;

/// Maximum review comment or conflict resolution length
pub const MAX_REMARK_LENGTH: u64 = 10000;

/// Maximum notification recipient length
pub const MAX_RECIPIENT_LENGTH: usize = 100;
