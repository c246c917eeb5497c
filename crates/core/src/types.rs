//! Shared domain types: ID/timestamp aliases, source/status enums, and
//! the validation issue record.
//!
//! Enums are TEXT-encoded in the database and SCREAMING_SNAKE_CASE on
//! the wire, matching the values the source systems and dashboard use.

use serde::{Deserialize, Serialize};

/// Primary-key type used across all tables.
pub type DbId = i64;

/// UTC timestamp used across all tables.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Source type
// ---------------------------------------------------------------------------

/// Which upstream system produced a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    /// Course registration (Hapily export).
    Course,
    /// Hut booking (Mews export).
    HutBooking,
    /// Section membership (manual CSV).
    Membership,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Course => "COURSE",
            SourceType::HutBooking => "HUT_BOOKING",
            SourceType::Membership => "MEMBERSHIP",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation status
// ---------------------------------------------------------------------------

/// Coarse validation state of a registration.
///
/// `Pending` is the pre-validation default; the rule engine itself only
/// produces `Valid`, `Warning`, or `Blocked`, and `Duplicate` is applied
/// by the status resolver. Precedence lives in [`crate::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Pending,
    Valid,
    Warning,
    Blocked,
    Duplicate,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "PENDING",
            ValidationStatus::Valid => "VALID",
            ValidationStatus::Warning => "WARNING",
            ValidationStatus::Blocked => "BLOCKED",
            ValidationStatus::Duplicate => "DUPLICATE",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValidationStatus {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PENDING" => Ok(ValidationStatus::Pending),
            "VALID" => Ok(ValidationStatus::Valid),
            "WARNING" => Ok(ValidationStatus::Warning),
            "BLOCKED" => Ok(ValidationStatus::Blocked),
            "DUPLICATE" => Ok(ValidationStatus::Duplicate),
            other => Err(crate::error::CoreError::Validation(format!(
                "Unknown validation status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Sync statuses
// ---------------------------------------------------------------------------

/// Per-registration sync state, updated by the sync orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
    Skipped,
}

/// Run-level state of one sync invocation.
///
/// A run is created `Running` and transitions exactly once to a
/// terminal state when the full pass finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncRunStatus {
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// Outcome recorded for one (run, registration) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncAction {
    Created,
    Updated,
    Skipped,
    Failed,
}

// ---------------------------------------------------------------------------
// HubSpot object kind (field mappings)
// ---------------------------------------------------------------------------

/// Target HubSpot object for a declarative field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HubSpotObject {
    Contact,
    Deal,
    Company,
}

// ---------------------------------------------------------------------------
// Validation issues
// ---------------------------------------------------------------------------

/// Severity of a single validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

/// One issue produced by the validation rule engine.
///
/// Issues keep their insertion order from rule evaluation; they are
/// never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationIssue {
    /// Build an issue tied to a specific payload field.
    pub fn new(
        severity: IssueSeverity,
        code: &str,
        message: impl Into<String>,
        field: Option<&str>,
    ) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            field: field.map(str::to_string),
        }
    }
}
