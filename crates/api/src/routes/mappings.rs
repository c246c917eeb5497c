//! Route definitions for the `/mappings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mappings;
use crate::state::AppState;

/// Routes mounted at `/mappings`.
///
/// ```text
/// GET /    -> list    (?sourceType=X)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(mappings::list))
}
