//! Route search within a crag.
//!
//! Crags hold tens to low hundreds of routes, so matching is an in-memory
//! scan with tiered scoring rather than an index.

use serde::Serialize;

use crate::grade::{Grade, GradeRange};
use crate::topo::resolve_topo_annotations;
use crate::types::Route;

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Query equals the route name.
pub const SCORE_EXACT_NAME: u32 = 100;

/// Route name starts with the query.
pub const SCORE_NAME_PREFIX: u32 = 80;

/// Route name contains the query.
pub const SCORE_NAME_SUBSTRING: u32 = 60;

/// Route area contains the query.
pub const SCORE_AREA_SUBSTRING: u32 = 40;

/// Query characters appear in order somewhere in the route name.
pub const SCORE_NAME_FUZZY: u32 = 20;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// A route that matched a query, with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    pub route: Route,
    pub score: u32,
}

/// Normalize a query for matching. Returns `None` for blank input.
fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Returns `true` if every char of `needle` appears in `haystack` in order.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|n| hay.any(|h| h == n))
}

/// Whether the route's own area or any of its annotation areas contains the query.
fn area_matches(route: &Route, normalized_query: &str) -> bool {
    let contains = |area: &str| area.to_lowercase().contains(normalized_query);
    route.area.as_deref().is_some_and(contains)
        || resolve_topo_annotations(route)
            .iter()
            .any(|a| contains(&a.area))
}

/// Score one route against an already-normalized query.
///
/// Returns `None` when the route does not match at all.
pub fn score_route(route: &Route, normalized_query: &str) -> Option<u32> {
    let name = route.name.to_lowercase();

    if name == normalized_query {
        return Some(SCORE_EXACT_NAME);
    }
    if name.starts_with(normalized_query) {
        return Some(SCORE_NAME_PREFIX);
    }
    if name.contains(normalized_query) {
        return Some(SCORE_NAME_SUBSTRING);
    }
    if area_matches(route, normalized_query) {
        return Some(SCORE_AREA_SUBSTRING);
    }
    if is_subsequence(normalized_query, &name) {
        return Some(SCORE_NAME_FUZZY);
    }
    None
}

/// Search `routes` for `query`, best matches first.
///
/// Routes outside `grades` are skipped before scoring. Equal scores keep
/// their input order. A blank query returns nothing.
pub fn search_routes(
    routes: &[Route],
    query: &str,
    grades: GradeRange,
    limit: Option<i64>,
) -> Vec<RouteMatch> {
    let Some(q) = normalize_query(query) else {
        return Vec::new();
    };
    let limit = clamp_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT) as usize;

    let mut matches: Vec<RouteMatch> = routes
        .iter()
        .filter(|r| grades.contains(Grade::parse(&r.grade)))
        .filter_map(|r| {
            score_route(r, &q).map(|score| RouteMatch {
                route: r.clone(),
                score,
            })
        })
        .collect();

    // Stable sort keeps input order within a tier.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
