use std::sync::Arc;

use accsync_hubspot::HubSpotClient;
use accsync_sync::SyncPolicy;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: accsync_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// HubSpot CRM client.
    pub hubspot: Arc<HubSpotClient>,
    /// Which validation statuses sync runs push to the CRM.
    pub sync_policy: SyncPolicy,
}
