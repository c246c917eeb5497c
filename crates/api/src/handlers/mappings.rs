//! Handlers for the `/mappings` resource (declarative field mappings).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use accsync_core::types::SourceType;
use accsync_db::models::field_mapping::FieldMapping;
use accsync_db::repositories::FieldMappingRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing field mappings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub source_type: Option<SourceType>,
}

/// GET /api/v1/mappings?sourceType=X
///
/// List the field mappings, optionally for one source type.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<FieldMapping>>>> {
    let mappings = match params.source_type {
        Some(source_type) => {
            FieldMappingRepo::list_by_source_type(&state.pool, source_type).await?
        }
        None => FieldMappingRepo::list_all(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: mappings }))
}
