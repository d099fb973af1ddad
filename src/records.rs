// 📦 Record Data Model
// The two record shapes served by the API, plus the nested metadata object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// METADATA OBJECT
// ============================================================================

/// Nested metadata object embedded in every record.
///
/// All keys are fixed; only the values vary per synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Department name, drawn from a fixed 5-entry list
    pub department: String,

    /// Office location, drawn from a fixed 5-entry list
    pub location: String,

    /// Years of experience (1-20)
    pub experience_years: u32,

    /// 2-4 distinct skills, sampled without replacement
    pub skills: Vec<String>,

    /// Whether the user holds a certification
    pub certification: bool,

    /// Generation-time instant, ISO datetime string
    pub last_login: String,
}

// ============================================================================
// STANDARD RECORD
// ============================================================================

/// A fully-populated synthetic record with the standard field set.
///
/// `score` and `description` are nullable: the keys are always serialized,
/// with an explicit `null` when absent, to match the published schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRecord {
    /// Sequence position within the virtual record set (1-based)
    pub id: u64,

    /// Freshly generated v4 UUID, unique per synthesis call
    pub uuid: Uuid,

    /// Display name: "User " + 6 random alphanumeric characters
    pub name: String,

    /// Random email: 8-char lowercase local part + fixed domain
    pub email: String,

    /// Age in years (18-80)
    pub age: u32,

    /// Height in centimeters (150.00-200.00)
    pub height: f64,

    /// Weight in kilograms (45.00-120.00)
    pub weight: f64,

    /// Active status flag
    pub is_active: bool,

    /// Account balance (0.00-100000.00)
    pub balance: f64,

    /// Birth date, ISO format: 2023-12-25
    pub birth_date: String,

    /// Creation instant, ISO datetime format
    pub created_at: String,

    /// 1-5 distinct tags in randomized order
    pub tags: Vec<String>,

    /// Nested metadata object
    pub metadata: RecordMetadata,

    /// Optional score (0.00-100.00), null half the time
    pub score: Option<f64>,

    /// Optional free-text description, null half the time
    pub description: Option<String>,
}

// ============================================================================
// MULTI-DATE RECORD
// ============================================================================

/// Record variant that renders its two date values in seven formats.
///
/// Every `birth_date_*` field encodes the same calendar date, and
/// `created_at_iso` / `created_at_timestamp` / `created_at_readable` encode
/// the same instant (to second precision for the epoch rendering).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiDateRecord {
    /// Sequence position within the virtual record set (1-based)
    pub id: u64,

    /// Freshly generated v4 UUID, unique per synthesis call
    pub uuid: Uuid,

    /// Display name: "User " + 6 random alphanumeric characters
    pub name: String,

    /// Random email: 8-char lowercase local part + fixed domain
    pub email: String,

    /// Age in years (18-80)
    pub age: u32,

    /// Height in centimeters (150.00-200.00)
    pub height: f64,

    /// Weight in kilograms (45.00-120.00)
    pub weight: f64,

    /// Active status flag
    pub is_active: bool,

    /// Account balance (0.00-100000.00)
    pub balance: f64,

    /// ISO format: 2023-12-25
    pub birth_date_iso: String,

    /// US format: 12/25/2023
    pub birth_date_us: String,

    /// EU format: 25/12/2023
    pub birth_date_eu: String,

    /// Long format: December 25, 2023
    pub birth_date_long: String,

    /// ISO datetime: 2023-12-25T10:30:00
    pub created_at_iso: String,

    /// Unix timestamp: 1703505000
    pub created_at_timestamp: i64,

    /// Readable: Mon, Dec 25 2023 10:30 AM
    pub created_at_readable: String,

    /// 1-5 distinct tags in randomized order
    pub tags: Vec<String>,

    /// Nested metadata object
    pub metadata: RecordMetadata,

    /// Optional score (0.00-100.00), null half the time
    pub score: Option<f64>,

    /// Optional free-text description, null half the time
    pub description: Option<String>,
}

// ============================================================================
// TESTS
// ============================================================================
