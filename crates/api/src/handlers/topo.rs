//! Handler for validating route topo data before an editor write.

use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use boulder_core::topo::resolve_topo_annotations;
use boulder_core::types::Route;
use boulder_core::validation::validate_route;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Body for `POST /topo/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateTopoRequest {
    pub route: Route,
}

/// Result of a successful validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTopoResponse {
    pub valid: bool,
    /// Number of annotations the route resolves to once stored.
    pub annotation_count: usize,
}

/// POST /topo/validate
///
/// Returns 400 with the first validation failure, otherwise the number of
/// annotations the route will resolve to.
pub async fn validate_topo(Json(input): Json<ValidateTopoRequest>) -> AppResult<impl IntoResponse> {
    validate_route(&input.route)?;
    let annotation_count = resolve_topo_annotations(&input.route).len();

    tracing::debug!(route_id = %input.route.id, annotation_count, "Route topo validated");

    Ok(Json(DataResponse {
        data: ValidateTopoResponse {
            valid: true,
            annotation_count,
        },
    }))
}
