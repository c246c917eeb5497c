//! Handlers for the `/registrations` resource.
//!
//! The list endpoint is the dashboard read path: it revalidates every
//! stored record, repairs stale statuses, and returns the enriched rows
//! with the canonical contact and CRM payload attached.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use accsync_core::types::{DbId, SourceType};
use accsync_db::repositories::RegistrationRepo;
use accsync_sync::RegistrationQueryService;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing registrations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Narrow the returned rows to one source type. Validation and
    /// duplicate detection still run over all records.
    pub source_type: Option<SourceType>,
}

/// GET /api/v1/registrations?sourceType=X
///
/// List registrations with freshly computed validation state.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<accsync_sync::RegistrationRow>>>> {
    let service = RegistrationQueryService::new(state.pool.clone());
    let rows = service.dashboard_rows(params.source_type).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/registrations/{id}
///
/// Fetch one stored registration as-is (no revalidation).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<accsync_db::models::registration::Registration>>> {
    let registration = RegistrationRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: registration }))
}
