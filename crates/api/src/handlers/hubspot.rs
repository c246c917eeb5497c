//! Handlers for the `/hubspot` resource (CRM connectivity probe).

use axum::extract::State;
use axum::Json;

use accsync_hubspot::AccountInfo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/hubspot/health
///
/// Probe the configured HubSpot portal with a read-only account lookup.
/// Upstream failures surface as 502.
pub async fn health(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<AccountInfo>>> {
    let info = state.hubspot.account_health().await?;
    Ok(Json(DataResponse { data: info }))
}
