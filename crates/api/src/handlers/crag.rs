//! Handlers for crag browsing: crags, face groups, route listing and search.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use boulder_core::face::group_routes_by_face;
use boulder_core::grade::{compare_grades, Grade, GradeRange};
use boulder_core::search::{self, clamp_limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Query parameters
   -------------------------------------------------------------------------- */

/// Parse optional `min_grade` / `max_grade` bounds.
///
/// A bound that is present but not a V-grade is a bad request rather than
/// silently unbounded.
pub fn grade_range(min_grade: Option<&str>, max_grade: Option<&str>) -> AppResult<GradeRange> {
    Ok(GradeRange::new(
        parse_bound("min_grade", min_grade)?,
        parse_bound("max_grade", max_grade)?,
    ))
}

fn parse_bound(name: &str, raw: Option<&str>) -> AppResult<Option<Grade>> {
    match raw {
        None => Ok(None),
        Some(s) => match Grade::parse(s) {
            Grade::Unknown => Err(AppError::BadRequest(format!(
                "{name} '{s}' is not a valid grade (expected V0-V17)"
            ))),
            grade => Ok(Some(grade)),
        },
    }
}

/// Query parameters for `GET /crags/{id}/routes`.
#[derive(Debug, Deserialize)]
pub struct ListRoutesParams {
    pub min_grade: Option<String>,
    pub max_grade: Option<String>,
}

/// Query parameters for `GET /crags/{id}/routes/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<i64>,
    pub min_grade: Option<String>,
    pub max_grade: Option<String>,
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// GET /crags
pub async fn list_crags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.crags.clone(),
    }))
}

/// GET /crags/{crag_id}/faces
///
/// Faces of a crag with every route drawn on each.
pub async fn list_face_groups(
    State(state): State<AppState>,
    Path(crag_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let routes = state.catalog.routes_for_crag(&crag_id)?;
    let faces = state.catalog.faces_for_crag(&crag_id)?;
    let groups = group_routes_by_face(&routes, &faces);

    tracing::debug!(crag_id = %crag_id, face_groups = groups.len(), "Face groups built");

    Ok(Json(DataResponse { data: groups }))
}

/// GET /crags/{crag_id}/routes
///
/// Routes of a crag ordered by grade (unknown grades last).
pub async fn list_routes(
    State(state): State<AppState>,
    Path(crag_id): Path<String>,
    Query(params): Query<ListRoutesParams>,
) -> AppResult<impl IntoResponse> {
    let range = grade_range(params.min_grade.as_deref(), params.max_grade.as_deref())?;
    let mut routes: Vec<_> = state
        .catalog
        .routes_for_crag(&crag_id)?
        .into_iter()
        .filter(|r| range.contains(Grade::parse(&r.grade)))
        .collect();
    routes.sort_by(|a, b| compare_grades(&a.grade, &b.grade));

    Ok(Json(DataResponse { data: routes }))
}

/// GET /crags/{crag_id}/routes/search?q=
pub async fn search_routes(
    State(state): State<AppState>,
    Path(crag_id): Path<String>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let range = grade_range(params.min_grade.as_deref(), params.max_grade.as_deref())?;
    let routes = state.catalog.routes_for_crag(&crag_id)?;
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let matches = search::search_routes(&routes, &params.q, range, Some(limit));

    tracing::debug!(
        crag_id = %crag_id,
        query = %params.q,
        results = matches.len(),
        "Route search",
    );

    Ok(Json(DataResponse { data: matches }))
}
