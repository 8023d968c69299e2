//! Topo data validation for editor writes.
//!
//! The read path never validates (resolution is total over any input);
//! these checks run before route or annotation data is accepted.

use crate::error::CoreError;
use crate::topo::MIN_TOPO_LINE_POINTS;
use crate::types::{Point, Route, TopoAnnotation};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of points in one topo line.
pub const MAX_TOPO_LINE_POINTS: usize = 200;

/// Minimum spline tension (straight segments).
pub const MIN_TOPO_TENSION: f64 = 0.0;

/// Maximum spline tension.
pub const MAX_TOPO_TENSION: f64 = 1.0;

/// Maximum number of annotations (faces) per route.
pub const MAX_ANNOTATIONS_PER_ROUTE: usize = 10;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Validate that a point is finite and inside the unit square.
pub fn validate_point(point: &Point) -> Result<(), CoreError> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(CoreError::Validation(
            "point coordinates must be finite numbers".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
        return Err(CoreError::Validation(format!(
            "point ({}, {}) is outside the normalized range [0, 1]",
            point.x, point.y
        )));
    }
    Ok(())
}

/// Validate a topo line's length and every point in it.
pub fn validate_topo_line(line: &[Point]) -> Result<(), CoreError> {
    if line.len() < MIN_TOPO_LINE_POINTS {
        return Err(CoreError::Validation(format!(
            "topo line needs at least {MIN_TOPO_LINE_POINTS} points, got {}",
            line.len()
        )));
    }
    if line.len() > MAX_TOPO_LINE_POINTS {
        return Err(CoreError::Validation(format!(
            "topo line has {} points, maximum is {MAX_TOPO_LINE_POINTS}",
            line.len()
        )));
    }
    for (i, point) in line.iter().enumerate() {
        validate_point(point)
            .map_err(|e| with_context(e, &format!("topo line point {i}")))?;
    }
    Ok(())
}

/// Validate an optional spline tension.
pub fn validate_topo_tension(tension: Option<f64>) -> Result<(), CoreError> {
    let Some(t) = tension else {
        return Ok(());
    };
    if !t.is_finite() {
        return Err(CoreError::Validation(
            "topo tension must be a finite number".to_string(),
        ));
    }
    if !(MIN_TOPO_TENSION..=MAX_TOPO_TENSION).contains(&t) {
        return Err(CoreError::Validation(format!(
            "topo tension must be between {MIN_TOPO_TENSION} and {MAX_TOPO_TENSION}, got {t}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Prefix a validation message with the location it came from.
fn with_context(err: CoreError, context: &str) -> CoreError {
    match err {
        CoreError::Validation(msg) => CoreError::Validation(format!("{context}: {msg}")),
        other => other,
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate one annotation.
pub fn validate_topo_annotation(annotation: &TopoAnnotation) -> Result<(), CoreError> {
    require_non_empty("faceId", &annotation.face_id)?;
    require_non_empty("area", &annotation.area)?;
    validate_topo_line(&annotation.topo_line)?;
    validate_topo_tension(annotation.topo_tension)
}

/// Validate a route before it is written.
///
/// Legacy topo fields are checked only when a `topo_line` is supplied; a
/// supplied line must then be fully drawable and come with a face and area.
pub fn validate_route(route: &Route) -> Result<(), CoreError> {
    require_non_empty("id", &route.id)?;
    require_non_empty("name", &route.name)?;
    require_non_empty("grade", &route.grade)?;
    require_non_empty("cragId", &route.crag_id)?;

    if let Some(line) = route.topo_line.as_deref() {
        if route.face_id.is_none() || route.area.is_none() {
            return Err(CoreError::Validation(
                "topoLine requires both faceId and area".to_string(),
            ));
        }
        validate_topo_line(line)?;
    }
    validate_topo_tension(route.topo_tension)?;

    if let Some(annotations) = route.topo_annotations.as_deref() {
        if annotations.len() > MAX_ANNOTATIONS_PER_ROUTE {
            return Err(CoreError::Validation(format!(
                "route has {} topo annotations, maximum is {MAX_ANNOTATIONS_PER_ROUTE}",
                annotations.len()
            )));
        }
        for (i, annotation) in annotations.iter().enumerate() {
            validate_topo_annotation(annotation)
                .map_err(|e| with_context(e, &format!("topoAnnotations[{i}]")))?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn line(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(0.5, i as f64 / n.max(1) as f64))
            .collect()
    }

    fn annotation() -> TopoAnnotation {
        TopoAnnotation {
            face_id: "face-1".into(),
            area: "主墙".into(),
            topo_line: line(3),
            topo_tension: Some(0.5),
        }
    }

    fn route() -> Route {
        Route {
            id: "r1".into(),
            name: "Moonwalk".into(),
            grade: "V3".into(),
            crag_id: "c1".into(),
            ..Route::default()
        }
    }

    // -- validate_point ------------------------------------------------------

    #[test]
    fn point_corners_accepted() {
        assert!(validate_point(&Point::new(0.0, 0.0)).is_ok());
        assert!(validate_point(&Point::new(1.0, 1.0)).is_ok());
    }

    #[test]
    fn point_outside_unit_square_rejected() {
        let err = validate_point(&Point::new(1.2, 0.5)).unwrap_err();
        assert!(err.to_string().contains("outside the normalized range"));
        assert!(validate_point(&Point::new(0.5, -0.01)).is_err());
    }

    #[test]
    fn point_nan_rejected() {
        assert!(validate_point(&Point::new(f64::NAN, 0.5)).is_err());
        assert!(validate_point(&Point::new(0.5, f64::INFINITY)).is_err());
    }

    // -- validate_topo_line --------------------------------------------------

    #[test]
    fn line_with_one_point_rejected() {
        let err = validate_topo_line(&line(1)).unwrap_err();
        assert!(err.to_string().contains("at least 2 points"));
    }

    #[test]
    fn line_at_bounds_accepted() {
        assert!(validate_topo_line(&line(MIN_TOPO_LINE_POINTS)).is_ok());
        assert!(validate_topo_line(&line(MAX_TOPO_LINE_POINTS)).is_ok());
    }

    #[test]
    fn line_over_max_rejected() {
        assert!(validate_topo_line(&line(MAX_TOPO_LINE_POINTS + 1)).is_err());
    }

    #[test]
    fn line_reports_bad_point_index() {
        let mut l = line(3);
        l[2] = Point::new(2.0, 0.0);
        let err = validate_topo_line(&l).unwrap_err();
        assert!(err.to_string().contains("point 2"));
    }

    // -- validate_topo_tension -----------------------------------------------

    #[test]
    fn tension_absent_or_in_range_accepted() {
        assert!(validate_topo_tension(None).is_ok());
        assert!(validate_topo_tension(Some(MIN_TOPO_TENSION)).is_ok());
        assert!(validate_topo_tension(Some(MAX_TOPO_TENSION)).is_ok());
    }

    #[test]
    fn tension_out_of_range_rejected() {
        assert!(validate_topo_tension(Some(1.5)).is_err());
        assert!(validate_topo_tension(Some(-0.1)).is_err());
        assert!(validate_topo_tension(Some(f64::NAN)).is_err());
    }

    // -- validate_topo_annotation --------------------------------------------

    #[test]
    fn annotation_valid() {
        assert!(validate_topo_annotation(&annotation()).is_ok());
    }

    #[test]
    fn annotation_blank_face_rejected() {
        let mut a = annotation();
        a.face_id = "  ".into();
        let err = validate_topo_annotation(&a).unwrap_err();
        assert!(err.to_string().contains("faceId must not be empty"));
    }

    // -- validate_route -------------------------------------------------------

    #[test]
    fn route_without_topo_data_accepted() {
        assert!(validate_route(&route()).is_ok());
    }

    #[test]
    fn route_blank_name_rejected() {
        let mut r = route();
        r.name = String::new();
        assert_matches!(validate_route(&r), Err(CoreError::Validation(_)));
    }

    #[test]
    fn legacy_line_requires_face_and_area() {
        let mut r = route();
        r.topo_line = Some(line(2));
        let err = validate_route(&r).unwrap_err();
        assert!(err.to_string().contains("requires both faceId and area"));

        r.face_id = Some("face-1".into());
        r.area = Some("主墙".into());
        assert!(validate_route(&r).is_ok());
    }

    #[test]
    fn route_annotation_errors_name_index() {
        let mut bad = annotation();
        bad.topo_tension = Some(3.0);
        let mut r = route();
        r.topo_annotations = Some(vec![annotation(), bad]);
        let err = validate_route(&r).unwrap_err();
        assert!(err.to_string().contains("topoAnnotations[1]"));
    }

    #[test]
    fn route_with_too_many_annotations_rejected() {
        let mut r = route();
        r.topo_annotations = Some(vec![annotation(); MAX_ANNOTATIONS_PER_ROUTE + 1]);
        assert!(validate_route(&r).is_err());
    }
}
