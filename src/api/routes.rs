//! API route configuration.

use crate::api::handlers::{destination_handler, destination_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public, read-only destination routes.
///
/// # Endpoints
///
/// - `GET /destinations`       - List all destinations (summary fields)
/// - `GET /destinations/{id}`  - Full record for one destination
pub fn destination_routes() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(destination_list_handler))
        .route("/destinations/{id}", get(destination_handler))
}
