//! Sync record models.
//!
//! Append-only audit trail: one row per (run, registration) pair
//! processed, never mutated after creation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use accsync_core::types::{DbId, SyncAction, Timestamp};

/// A row from the `sync_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRecord {
    pub id: DbId,
    pub sync_run_id: DbId,
    pub registration_id: DbId,
    pub action: SyncAction,
    pub hubspot_id: Option<String>,
    pub error_message: Option<String>,
    pub duration_ms: i64,
    pub created_at: Timestamp,
}

/// DTO for appending one audit row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSyncRecord {
    pub sync_run_id: DbId,
    pub registration_id: DbId,
    pub action: SyncAction,
    pub hubspot_id: Option<String>,
    pub error_message: Option<String>,
    pub duration_ms: i64,
}
