//! Sync run orchestrator.
//!
//! A run revalidates everything through the query service, records a
//! run row, then walks the records sequentially: skip the ineligible,
//! upsert the rest, append one audit row per record, and close the run
//! exactly once with final counters. Per-record CRM failures mark the
//! run FAILED but never stop it.

use std::time::Instant;

use serde::Serialize;

use accsync_core::types::{DbId, SyncAction, SyncRunStatus, SyncStatus, ValidationStatus};
use accsync_db::models::sync_record::CreateSyncRecord;
use accsync_db::models::sync_run::SyncCounters;
use accsync_db::repositories::{RegistrationRepo, SyncRecordRepo, SyncRunRepo};
use accsync_db::DbPool;

use crate::query::{RegistrationQueryService, RegistrationRow};
use crate::ContactUpserter;

/// Env var holding a comma-separated list of sync-eligible validation
/// statuses, e.g. `VALID,WARNING,DUPLICATE`.
pub const ELIGIBLE_STATUSES_ENV: &str = "SYNC_ELIGIBLE_STATUSES";

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which validation statuses a run will push to the CRM.
///
/// Defaults to VALID and WARNING. DUPLICATE is deliberately excluded by
/// default so flagged records get a human look before merging into the
/// remote contact; operators who want them pushed anyway opt in via
/// [`ELIGIBLE_STATUSES_ENV`].
#[derive(Debug, Clone)]
pub struct SyncPolicy {
    eligible_statuses: Vec<ValidationStatus>,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            eligible_statuses: vec![ValidationStatus::Valid, ValidationStatus::Warning],
        }
    }
}

impl SyncPolicy {
    pub fn new(eligible_statuses: Vec<ValidationStatus>) -> Self {
        Self { eligible_statuses }
    }

    /// Read the policy from the environment, falling back to the
    /// default set. Unrecognized entries are logged and ignored.
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var(ELIGIBLE_STATUSES_ENV) else {
            return Self::default();
        };

        let mut eligible = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.to_uppercase().parse::<ValidationStatus>() {
                Ok(status) => eligible.push(status),
                Err(_) => {
                    tracing::warn!(value = entry, "Ignoring unknown validation status in {ELIGIBLE_STATUSES_ENV}");
                }
            }
        }

        if eligible.is_empty() {
            Self::default()
        } else {
            Self::new(eligible)
        }
    }

    pub fn is_eligible(&self, status: ValidationStatus) -> bool {
        self.eligible_statuses.contains(&status)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Final state of one run, returned to the caller and the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub sync_run_id: DbId,
    pub status: SyncRunStatus,
    pub total_records: i32,
    pub synced_records: i32,
    pub failed_records: i32,
    pub skipped_records: i32,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Drives one full sync pass against an injected CRM.
pub struct SyncOrchestrator {
    pool: DbPool,
    policy: SyncPolicy,
}

impl SyncOrchestrator {
    pub fn new(pool: DbPool, policy: SyncPolicy) -> Self {
        Self { pool, policy }
    }

    /// Execute a run. Records are processed strictly in query order,
    /// one at a time; the CRM never sees concurrent upserts from the
    /// same run.
    ///
    /// Only infrastructure failures (unreachable record store) abort
    /// the run mid-flight. CRM failures are absorbed per record.
    pub async fn run(
        &self,
        crm: &dyn ContactUpserter,
        triggered_by: &str,
    ) -> Result<SyncSummary, sqlx::Error> {
        let query_service = RegistrationQueryService::new(self.pool.clone());
        let rows = query_service.dashboard_rows(None).await?;

        let run = SyncRunRepo::create(&self.pool, triggered_by, rows.len() as i32).await?;
        tracing::info!(
            sync_run_id = run.id,
            total = rows.len(),
            triggered_by,
            "Starting sync run"
        );

        let mut counters = SyncCounters::default();
        let mut final_status = SyncRunStatus::Completed;

        for row in &rows {
            let started = Instant::now();

            if !self.policy.is_eligible(row.validation_status) {
                self.record_skip(
                    run.id,
                    row,
                    format!("Skipped due to validation status: {}", row.validation_status),
                    started,
                )
                .await?;
                counters.skipped += 1;
                continue;
            }

            let Some(email) = row.email.as_deref().filter(|e| !e.trim().is_empty()) else {
                self.record_skip(
                    run.id,
                    row,
                    "Skipped because email is missing.".to_string(),
                    started,
                )
                .await?;
                counters.skipped += 1;
                continue;
            };

            let properties = row.hubspot_payload.clone().unwrap_or_default();
            match crm.upsert(email, &properties).await {
                Ok(outcome) => {
                    RegistrationRepo::mark_synced(&self.pool, row.id, outcome.remote_id.as_deref())
                        .await?;
                    // First push creates the remote contact; any later
                    // push is an update of the existing one.
                    let action = if row.hubspot_id.is_none() {
                        SyncAction::Created
                    } else {
                        SyncAction::Updated
                    };
                    SyncRecordRepo::create(
                        &self.pool,
                        &CreateSyncRecord {
                            sync_run_id: run.id,
                            registration_id: row.id,
                            action,
                            hubspot_id: outcome.remote_id.or_else(|| row.hubspot_id.clone()),
                            error_message: None,
                            duration_ms: started.elapsed().as_millis() as i64,
                        },
                    )
                    .await?;
                    counters.synced += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        sync_run_id = run.id,
                        registration_id = row.id,
                        error = %error,
                        "CRM upsert failed"
                    );
                    RegistrationRepo::update_sync_status(&self.pool, row.id, SyncStatus::Failed)
                        .await?;
                    SyncRecordRepo::create(
                        &self.pool,
                        &CreateSyncRecord {
                            sync_run_id: run.id,
                            registration_id: row.id,
                            action: SyncAction::Failed,
                            hubspot_id: row.hubspot_id.clone(),
                            error_message: Some(format!("{error:#}")),
                            duration_ms: started.elapsed().as_millis() as i64,
                        },
                    )
                    .await?;
                    counters.failed += 1;
                    final_status = SyncRunStatus::Failed;
                }
            }
        }

        let completed = SyncRunRepo::complete(&self.pool, run.id, final_status, counters).await?;
        tracing::info!(
            sync_run_id = completed.id,
            status = ?completed.status,
            synced = completed.synced_records,
            failed = completed.failed_records,
            skipped = completed.skipped_records,
            "Finished sync run"
        );

        Ok(SyncSummary {
            sync_run_id: completed.id,
            status: completed.status,
            total_records: completed.total_records,
            synced_records: completed.synced_records,
            failed_records: completed.failed_records,
            skipped_records: completed.skipped_records,
        })
    }

    async fn record_skip(
        &self,
        sync_run_id: DbId,
        row: &RegistrationRow,
        message: String,
        started: Instant,
    ) -> Result<(), sqlx::Error> {
        RegistrationRepo::update_sync_status(&self.pool, row.id, SyncStatus::Skipped).await?;
        SyncRecordRepo::create(
            &self.pool,
            &CreateSyncRecord {
                sync_run_id,
                registration_id: row.id,
                action: SyncAction::Skipped,
                hubspot_id: row.hubspot_id.clone(),
                error_message: Some(message),
                duration_ms: started.elapsed().as_millis() as i64,
            },
        )
        .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
