//! Route definitions for the `/registrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

/// Routes mounted at `/registrations`.
///
/// ```text
/// GET /           -> list       (?sourceType=X)
/// GET /{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(registrations::list))
        .route("/{id}", get(registrations::get_by_id))
}
