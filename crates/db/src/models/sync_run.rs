//! Sync run models.
//!
//! One row per sync invocation. Created `RUNNING`; updated exactly once
//! to a terminal status with final counters when the pass finishes.

use serde::Serialize;
use sqlx::FromRow;

use accsync_core::types::{DbId, SyncRunStatus, Timestamp};

/// A row from the `sync_runs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRun {
    pub id: DbId,
    pub status: SyncRunStatus,
    pub triggered_by: String,
    pub total_records: i32,
    pub synced_records: i32,
    pub failed_records: i32,
    pub skipped_records: i32,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Final counters written with the terminal status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncCounters {
    pub synced: i32,
    pub failed: i32,
    pub skipped: i32,
}
