//! Registration query service: the read-and-repair path.
//!
//! A dashboard read loads every record, recomputes validation (globally,
//! so cross-source duplicates are always visible), persists any rows
//! whose stored status or issue list drifted from the computed state,
//! and returns the enriched view model. The optional source-type filter
//! applies only to the returned rows, never to the computation.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use accsync_core::canonical::{canonicalize, CanonicalContact};
use accsync_core::hubspot::{build_contact_payload, ContactProperties};
use accsync_core::payload::RawPayload;
use accsync_core::types::{DbId, SourceType, SyncStatus, Timestamp, ValidationIssue, ValidationStatus};
use accsync_db::repositories::RegistrationRepo;
use accsync_db::DbPool;

use crate::compute::{compute_validation, ComputedValidation};

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// One registration enriched for the dashboard: stored fields plus the
/// computed canonical contact and CRM payload.
///
/// `canonical` and `hubspot_payload` are `None` when the raw payload
/// does not decode; such rows are BLOCKED and never reach the CRM.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRow {
    pub id: DbId,
    pub source_type: SourceType,
    pub external_id: String,
    pub source_ref: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub validation_status: ValidationStatus,
    pub validation_issues: Vec<ValidationIssue>,
    pub sync_status: SyncStatus,
    pub hubspot_id: Option<String>,
    pub updated_at: Timestamp,
    pub raw_data: Value,
    pub canonical: Option<CanonicalContact>,
    pub hubspot_payload: Option<ContactProperties>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Orchestrates validation, duplicate detection, and status repair
/// across the full record set.
pub struct RegistrationQueryService {
    pool: DbPool,
}

impl RegistrationQueryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load, validate, repair, and return the enriched rows.
    ///
    /// Repair writes are issued concurrently and all awaited; a single
    /// failing write is logged and skipped rather than failing the
    /// pass. Only an unreachable record store fails the whole call.
    pub async fn dashboard_rows(
        &self,
        filter: Option<SourceType>,
    ) -> Result<Vec<RegistrationRow>, sqlx::Error> {
        // Full set regardless of filter: duplicate detection is global.
        let all = RegistrationRepo::list_all(&self.pool).await?;
        let computed = compute_validation(&all);

        self.reconcile(&computed).await;

        let by_id: HashMap<DbId, &ComputedValidation> =
            computed.iter().map(|c| (c.id, c)).collect();

        let rows = all
            .into_iter()
            .filter(|r| filter.map_or(true, |st| r.source_type == st))
            .map(|r| {
                let computed = by_id.get(&r.id);
                let (validation_status, validation_issues) = match computed {
                    Some(c) => (c.status, c.issues.clone()),
                    None => (ValidationStatus::Pending, Vec::new()),
                };

                let decoded = RawPayload::decode(r.source_type, &r.raw_data).ok();
                let canonical = decoded.as_ref().map(canonicalize);
                let hubspot_payload = canonical.as_ref().map(build_contact_payload);

                RegistrationRow {
                    id: r.id,
                    source_type: r.source_type,
                    external_id: r.external_id,
                    source_ref: r.source_ref,
                    first_name: r.first_name,
                    last_name: r.last_name,
                    email: r.email,
                    validation_status,
                    validation_issues,
                    sync_status: r.sync_status,
                    hubspot_id: r.hubspot_id,
                    updated_at: r.updated_at,
                    raw_data: r.raw_data,
                    canonical,
                    hubspot_payload,
                }
            })
            .collect();

        Ok(rows)
    }

    /// Persist every changed row. Writes have no ordering dependency on
    /// each other, so they are issued together and all awaited.
    async fn reconcile(&self, computed: &[ComputedValidation]) {
        let changed: Vec<&ComputedValidation> = computed.iter().filter(|c| c.changed).collect();
        if changed.is_empty() {
            return;
        }

        tracing::debug!(count = changed.len(), "Persisting validation repairs");

        let writes = changed.iter().map(|c| {
            RegistrationRepo::update_validation(&self.pool, c.id, c.status, &c.issues_json)
        });
        let results = futures::future::join_all(writes).await;

        for (c, result) in changed.iter().zip(results) {
            if let Err(error) = result {
                tracing::warn!(
                    registration_id = c.id,
                    error = %error,
                    "Failed to persist validation repair"
                );
            }
        }
    }
}
