//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod field_mapping_repo;
pub mod registration_repo;
pub mod sync_record_repo;
pub mod sync_run_repo;

pub use field_mapping_repo::FieldMappingRepo;
pub use registration_repo::RegistrationRepo;
pub use sync_record_repo::SyncRecordRepo;
pub use sync_run_repo::SyncRunRepo;
