//! Repository for the `field_mappings` table.

use sqlx::PgPool;

use accsync_core::types::SourceType;

use crate::models::field_mapping::FieldMapping;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, source_type, source_field, hubspot_object, hubspot_property, \
    transform_fn, created_at";

/// Provides read operations for the declarative field mappings.
pub struct FieldMappingRepo;

impl FieldMappingRepo {
    /// List every mapping, grouped by source type.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FieldMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM field_mappings
             ORDER BY source_type, id"
        );
        sqlx::query_as::<_, FieldMapping>(&query)
            .fetch_all(pool)
            .await
    }

    /// List mappings for one source type.
    pub async fn list_by_source_type(
        pool: &PgPool,
        source_type: SourceType,
    ) -> Result<Vec<FieldMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM field_mappings
             WHERE source_type = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, FieldMapping>(&query)
            .bind(source_type)
            .fetch_all(pool)
            .await
    }
}
