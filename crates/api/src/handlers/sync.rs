//! Handlers for the `/sync` resource: triggering runs and reading the
//! run history and per-record audit trail.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use accsync_core::types::DbId;
use accsync_db::models::sync_record::SyncRecord;
use accsync_db::models::sync_run::SyncRun;
use accsync_db::repositories::{SyncRecordRepo, SyncRunRepo};
use accsync_sync::{SyncOrchestrator, SyncSummary};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for triggering a sync run.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSyncRequest {
    /// Free-form actor label recorded on the run (default: `Manual`).
    pub triggered_by: Option<String>,
}

/// POST /api/v1/sync/runs
///
/// Run a full sync pass against HubSpot. Blocks until the run reaches a
/// terminal state and returns its summary with HTTP 201.
pub async fn trigger(
    State(state): State<AppState>,
    body: Option<Json<TriggerSyncRequest>>,
) -> AppResult<(StatusCode, Json<DataResponse<SyncSummary>>)> {
    let triggered_by = body
        .and_then(|Json(b)| b.triggered_by)
        .unwrap_or_else(|| "Manual".to_string());

    let orchestrator = SyncOrchestrator::new(state.pool.clone(), state.sync_policy.clone());
    let summary = orchestrator.run(state.hubspot.as_ref(), &triggered_by).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: summary })))
}

/// Query parameters for listing sync runs.
#[derive(Debug, Deserialize)]
pub struct ListRunsParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/sync/runs?limit=N
///
/// List recent sync runs, newest first (default limit: 20).
pub async fn list_runs(
    State(state): State<AppState>,
    Query(params): Query<ListRunsParams>,
) -> AppResult<Json<DataResponse<Vec<SyncRun>>>> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let runs = SyncRunRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: runs }))
}

/// GET /api/v1/sync/runs/{id}
///
/// Fetch one sync run. Returns 404 if it does not exist.
pub async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SyncRun>>> {
    let run = SyncRunRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: run }))
}

/// GET /api/v1/sync/runs/{id}/records
///
/// List the per-registration audit trail for one run, in processing
/// order. Returns 404 if the run does not exist.
pub async fn list_run_records(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SyncRecord>>>> {
    // Existence check so an unknown run is a 404, not an empty list.
    SyncRunRepo::find_by_id(&state.pool, id).await?;
    let records = SyncRecordRepo::list_by_run(&state.pool, id).await?;
    Ok(Json(DataResponse { data: records }))
}
