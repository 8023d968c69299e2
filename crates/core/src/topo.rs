//! Topo annotation resolution.
//!
//! Routes carry annotations in one of two shapes: the legacy single-line
//! fields directly on the route, or the newer `topo_annotations` list that
//! supports several faces per route. This module normalizes both into an
//! ordered list of [`TopoAnnotation`]s.

use std::borrow::Cow;

use crate::types::{Point, Route, TopoAnnotation};

/// Minimum number of points for a topo line to be drawable.
pub const MIN_TOPO_LINE_POINTS: usize = 2;

/// Returns `true` if the line has enough points to be drawn.
pub fn is_drawable_line(line: &[Point]) -> bool {
    line.len() >= MIN_TOPO_LINE_POINTS
}

/// Returns `true` if the route's *legacy* `topo_line` field is drawable.
///
/// This intentionally ignores `topo_annotations`: single-line mode detection
/// keys off the legacy field alone, so a route mapped only through
/// `topo_annotations` reports `false` here.
pub fn has_legacy_topo_line(route: &Route) -> bool {
    route
        .topo_line
        .as_deref()
        .is_some_and(is_drawable_line)
}

// ---------------------------------------------------------------------------
// Source classification
// ---------------------------------------------------------------------------

/// Which representation a route's annotations come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TopoSource<'a> {
    /// Non-empty `topo_annotations`; authoritative.
    Annotations(&'a [TopoAnnotation]),
    /// Synthesized from the legacy `face_id` / `area` / `topo_line` fields.
    Legacy(TopoAnnotation),
    /// The route is not mapped to any face yet.
    Unmapped,
}

impl<'a> TopoSource<'a> {
    /// Classify a route. First match wins:
    ///
    /// 1. non-empty `topo_annotations`
    /// 2. `face_id`, `area` and a drawable `topo_line` all present
    /// 3. nothing
    pub fn of(route: &'a Route) -> Self {
        if let Some(annotations) = route.topo_annotations.as_deref() {
            if !annotations.is_empty() {
                return Self::Annotations(annotations);
            }
        }

        match (&route.face_id, &route.area, &route.topo_line) {
            (Some(face_id), Some(area), Some(line)) if is_drawable_line(line) => {
                Self::Legacy(TopoAnnotation {
                    face_id: face_id.clone(),
                    area: area.clone(),
                    topo_line: line.clone(),
                    topo_tension: route.topo_tension,
                })
            }
            _ => Self::Unmapped,
        }
    }

    /// Convert into the normalized annotation list.
    pub fn into_annotations(self) -> Cow<'a, [TopoAnnotation]> {
        match self {
            Self::Annotations(annotations) => Cow::Borrowed(annotations),
            Self::Legacy(annotation) => Cow::Owned(vec![annotation]),
            Self::Unmapped => Cow::Owned(Vec::new()),
        }
    }
}

/// Resolve a route's annotations into one ordered list (possibly empty).
///
/// A non-empty `topo_annotations` list is returned borrowed and unchanged.
pub fn resolve_topo_annotations(route: &Route) -> Cow<'_, [TopoAnnotation]> {
    TopoSource::of(route).into_annotations()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
