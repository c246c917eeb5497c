//! Registration models and DTOs.
//!
//! One row per ingested record. `raw_data` is immutable after
//! ingestion; `validation_status` / `validation_errors` are repaired by
//! the query service and `sync_status` / `hubspot_id` by the sync
//! orchestrator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use accsync_core::types::{DbId, SourceType, SyncStatus, Timestamp, ValidationStatus};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: DbId,
    pub source_type: SourceType,
    pub external_id: String,
    pub source_ref: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Source-shaped payload; schema varies by `source_type`.
    pub raw_data: Value,
    pub validation_status: ValidationStatus,
    /// Ordered issue list as stored JSON (`Vec<ValidationIssue>`).
    pub validation_errors: Value,
    pub sync_status: SyncStatus,
    pub hubspot_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for ingesting a new registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistration {
    pub source_type: SourceType,
    pub external_id: String,
    pub source_ref: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub raw_data: Value,
}
