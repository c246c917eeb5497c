//! Repository for the `registrations` table.

use serde_json::Value;
use sqlx::PgPool;

use accsync_core::types::{DbId, SourceType, SyncStatus, ValidationStatus};

use crate::models::registration::{CreateRegistration, Registration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, source_type, external_id, source_ref, email, first_name, last_name, \
    raw_data, validation_status, validation_errors, sync_status, hubspot_id, \
    created_at, updated_at";

/// Provides CRUD operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Ingest a new registration. Validation and sync fields start at
    /// their PENDING defaults.
    pub async fn create(
        pool: &PgPool,
        body: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations
                (source_type, external_id, source_ref, email, first_name, last_name, raw_data)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(body.source_type)
            .bind(&body.external_id)
            .bind(&body.source_ref)
            .bind(&body.email)
            .bind(&body.first_name)
            .bind(&body.last_name)
            .bind(&body.raw_data)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Registration, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List every registration, most recently updated first.
    ///
    /// Duplicate detection needs the full set, so this is the load used
    /// by the query service regardless of any display filter.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations ORDER BY updated_at DESC");
        sqlx::query_as::<_, Registration>(&query)
            .fetch_all(pool)
            .await
    }

    /// List registrations for one source type, most recently updated first.
    pub async fn list_by_source_type(
        pool: &PgPool,
        source_type: SourceType,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE source_type = $1
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(source_type)
            .fetch_all(pool)
            .await
    }

    /// Persist a repaired validation status and issue list.
    pub async fn update_validation(
        pool: &PgPool,
        id: DbId,
        status: ValidationStatus,
        issues: &Value,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET
                validation_status = $1,
                validation_errors = $2,
                updated_at        = NOW()
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(status)
            .bind(issues)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Set the per-registration sync status (SKIPPED / FAILED paths).
    pub async fn update_sync_status(
        pool: &PgPool,
        id: DbId,
        sync_status: SyncStatus,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET
                sync_status = $1,
                updated_at  = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(sync_status)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Mark a registration synced, updating the remote id when the CRM
    /// returned one and keeping the prior value otherwise.
    pub async fn mark_synced(
        pool: &PgPool,
        id: DbId,
        hubspot_id: Option<&str>,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "UPDATE registrations SET
                sync_status = 'SYNCED',
                hubspot_id  = COALESCE($1, hubspot_id),
                updated_at  = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(hubspot_id)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
