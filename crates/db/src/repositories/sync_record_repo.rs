//! Repository for the `sync_records` table (append-only audit trail).

use sqlx::PgPool;

use accsync_core::types::DbId;

use crate::models::sync_record::{CreateSyncRecord, SyncRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, sync_run_id, registration_id, action, hubspot_id, \
    error_message, duration_ms, created_at";

/// Provides append and list operations for sync records.
pub struct SyncRecordRepo;

impl SyncRecordRepo {
    /// Append one audit row. Rows are never mutated after creation.
    pub async fn create(
        pool: &PgPool,
        body: &CreateSyncRecord,
    ) -> Result<SyncRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO sync_records
                (sync_run_id, registration_id, action, hubspot_id, error_message, duration_ms)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SyncRecord>(&query)
            .bind(body.sync_run_id)
            .bind(body.registration_id)
            .bind(body.action)
            .bind(&body.hubspot_id)
            .bind(&body.error_message)
            .bind(body.duration_ms)
            .fetch_one(pool)
            .await
    }

    /// List all records for one run, in processing order.
    pub async fn list_by_run(
        pool: &PgPool,
        sync_run_id: DbId,
    ) -> Result<Vec<SyncRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sync_records
             WHERE sync_run_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, SyncRecord>(&query)
            .bind(sync_run_id)
            .fetch_all(pool)
            .await
    }
}
