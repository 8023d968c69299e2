//! Handlers for overlay mode derivation.
//!
//! The "show all lines" toggle is view-local state owned by the client; it
//! is passed in on every request and echoed back in the bundle. Nothing is
//! stored server-side.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use boulder_core::face::face_siblings;
use boulder_core::overlay::{derive_overlay_mode, OverlayKind, OverlayMode};
use boulder_core::types::Route;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Overlay bundle plus the rendering path it resolves to.
#[derive(Debug, Serialize)]
pub struct OverlayResponse {
    #[serde(flatten)]
    pub mode: OverlayMode,
    pub kind: OverlayKind,
}

impl From<OverlayMode> for OverlayResponse {
    fn from(mode: OverlayMode) -> Self {
        let kind = mode.kind();
        Self { mode, kind }
    }
}

/// Query parameters for `GET /routes/{id}/overlay`.
#[derive(Debug, Deserialize)]
pub struct RouteOverlayParams {
    #[serde(default)]
    pub show_all: bool,
}

/// Body for `POST /overlay`.
///
/// Every field may be missing or `null`; both mean "nothing".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRequest {
    pub route: Option<Route>,
    pub sibling_routes: Option<Vec<Route>>,
    pub show_all_overlay: Option<bool>,
}

/// GET /routes/{route_id}/overlay?show_all=
///
/// Siblings are the catalog routes sharing the route's face.
pub async fn route_overlay(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
    Query(params): Query<RouteOverlayParams>,
) -> AppResult<impl IntoResponse> {
    let route = state.catalog.route(&route_id)?;
    let crag_routes = state.catalog.routes_for_crag(&route.crag_id)?;
    let siblings = face_siblings(route, &crag_routes);

    let response = OverlayResponse::from(derive_overlay_mode(
        Some(route),
        &siblings,
        params.show_all,
    ));

    tracing::debug!(
        route_id = %route_id,
        siblings = siblings.len(),
        kind = response.kind.as_str(),
        "Overlay derived",
    );

    Ok(Json(DataResponse { data: response }))
}

/// POST /overlay
///
/// Derive an overlay bundle from routes supplied by the caller.
pub async fn derive_overlay(Json(input): Json<OverlayRequest>) -> AppResult<impl IntoResponse> {
    let siblings = input.sibling_routes.unwrap_or_default();
    let response = OverlayResponse::from(derive_overlay_mode(
        input.route.as_ref(),
        &siblings,
        input.show_all_overlay.unwrap_or_default(),
    ));
    Ok(Json(DataResponse { data: response }))
}
