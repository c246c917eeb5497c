//! Field mapping models.
//!
//! Declarative routing table documenting which source field feeds which
//! HubSpot property. The payload builder currently hardcodes the
//! equivalent logic; these rows must stay semantically consistent with
//! it (see the seed migration).

use serde::Serialize;
use sqlx::FromRow;

use accsync_core::types::{DbId, HubSpotObject, SourceType, Timestamp};

/// A row from the `field_mappings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub id: DbId,
    pub source_type: SourceType,
    pub source_field: String,
    pub hubspot_object: HubSpotObject,
    pub hubspot_property: String,
    /// Named transform applied en route (e.g. `normalizePhone`).
    pub transform_fn: Option<String>,
    pub created_at: Timestamp,
}
