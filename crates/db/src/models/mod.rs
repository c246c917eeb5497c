//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs for inserts and patches

pub mod field_mapping;
pub mod registration;
pub mod sync_record;
pub mod sync_run;
