pub mod health;
pub mod hubspot;
pub mod mappings;
pub mod registrations;
pub mod sync;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /registrations                    list (?sourceType=X)
/// /registrations/{id}               get one
///
/// /sync/runs                        trigger (POST), list (GET, ?limit=N)
/// /sync/runs/{id}                   get one
/// /sync/runs/{id}/records           per-record audit trail
///
/// /mappings                         list field mappings (?sourceType=X)
///
/// /hubspot/health                   CRM connectivity probe
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/registrations", registrations::router())
        .nest("/sync", sync::router())
        .nest("/mappings", mappings::router())
        .nest("/hubspot", hubspot::router())
}
