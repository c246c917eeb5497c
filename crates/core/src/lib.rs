//! Pure domain logic for the registration sync pipeline.
//!
//! Everything in this crate is free of I/O: normalization, payload
//! decoding, canonicalization, validation rules, duplicate detection,
//! status resolution, and the HubSpot property-bag builder. Persistence
//! lives in `accsync-db`, orchestration in `accsync-sync`.

pub mod canonical;
pub mod duplicate;
pub mod error;
pub mod hubspot;
pub mod normalize;
pub mod payload;
pub mod status;
pub mod types;
pub mod validation;
