//! REST client for the HubSpot CRM.
//!
//! Wraps the two endpoints the pipeline needs (contact batch upsert and
//! the account-info health probe) using [`reqwest`]. The upsert is
//! keyed by email, which is what makes re-running a sync idempotent.

pub mod client;

pub use client::{AccountInfo, ContactUpsert, HubSpotClient, HubSpotError};
