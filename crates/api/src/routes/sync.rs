//! Route definitions for the `/sync` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sync;
use crate::state::AppState;

/// Routes mounted at `/sync`.
///
/// ```text
/// POST /runs                -> trigger
/// GET  /runs                -> list_runs         (?limit=N)
/// GET  /runs/{id}           -> get_run
/// GET  /runs/{id}/records   -> list_run_records
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/runs", get(sync::list_runs).post(sync::trigger))
        .route("/runs/{id}", get(sync::get_run))
        .route("/runs/{id}/records", get(sync::list_run_records))
}
