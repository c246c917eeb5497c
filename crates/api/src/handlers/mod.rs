//! HTTP handlers, grouped by resource.

pub mod hubspot;
pub mod mappings;
pub mod registrations;
pub mod sync;
