//! Repository for the `sync_runs` table.

use sqlx::PgPool;

use accsync_core::types::{DbId, SyncRunStatus};

use crate::models::sync_run::{SyncCounters, SyncRun};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, status, triggered_by, total_records, synced_records, \
    failed_records, skipped_records, started_at, completed_at";

/// Provides CRUD operations for sync runs.
pub struct SyncRunRepo;

impl SyncRunRepo {
    /// Create a run in RUNNING state with a snapshot of the total
    /// record count.
    pub async fn create(
        pool: &PgPool,
        triggered_by: &str,
        total_records: i32,
    ) -> Result<SyncRun, sqlx::Error> {
        let query = format!(
            "INSERT INTO sync_runs (status, triggered_by, total_records)
             VALUES ('RUNNING', $1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SyncRun>(&query)
            .bind(triggered_by)
            .bind(total_records)
            .fetch_one(pool)
            .await
    }

    /// Transition a run to its terminal status with final counters and
    /// completion timestamp. The only run-level mutation after create.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        status: SyncRunStatus,
        counters: SyncCounters,
    ) -> Result<SyncRun, sqlx::Error> {
        let query = format!(
            "UPDATE sync_runs SET
                status          = $1,
                synced_records  = $2,
                failed_records  = $3,
                skipped_records = $4,
                completed_at    = NOW()
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SyncRun>(&query)
            .bind(status)
            .bind(counters.synced)
            .bind(counters.failed)
            .bind(counters.skipped)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a run by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<SyncRun, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sync_runs WHERE id = $1");
        sqlx::query_as::<_, SyncRun>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List recent runs, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<SyncRun>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sync_runs
             ORDER BY started_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, SyncRun>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
