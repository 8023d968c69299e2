pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /crags                                   list crags
/// /crags/{crag_id}/faces                   face groups
/// /crags/{crag_id}/routes                  list routes (grade filter)
/// /crags/{crag_id}/routes/search           search routes
/// /routes/{route_id}/overlay               overlay mode from catalog siblings
/// /overlay                                 overlay mode from posted routes
/// /topo/validate                           validate a route's topo data
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/crags", get(handlers::crag::list_crags))
        .route("/crags/{crag_id}/faces", get(handlers::crag::list_face_groups))
        .route("/crags/{crag_id}/routes", get(handlers::crag::list_routes))
        .route(
            "/crags/{crag_id}/routes/search",
            get(handlers::crag::search_routes),
        )
        .route(
            "/routes/{route_id}/overlay",
            get(handlers::overlay::route_overlay),
        )
        .route("/overlay", post(handlers::overlay::derive_overlay))
        .route("/topo/validate", post(handlers::topo::validate_topo))
}
