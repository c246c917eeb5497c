//! Route definitions for the `/hubspot` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hubspot;
use crate::state::AppState;

/// Routes mounted at `/hubspot`.
///
/// ```text
/// GET /health    -> health (CRM connectivity probe)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(hubspot::health))
}
