//! Shared data model for crags, faces and routes.
//!
//! Field names serialize as camelCase to match the document store the
//! records are fetched from.

use serde::{Deserialize, Serialize};

/// Document-store identifiers are opaque strings.
pub type EntityId = String;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A point on a face photo in normalized image-fraction space.
///
/// Both axes run from `0.0` (left/top) to `1.0` (right/bottom) so a line
/// stays valid whatever size the photo is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }

    /// Convert to pixel coordinates for an image of the given size.
    pub fn to_pixels(self, width: f64, height: f64) -> (f64, f64) {
        (self.x * width, self.y * height)
    }
}

// ---------------------------------------------------------------------------
// Topo annotations
// ---------------------------------------------------------------------------

/// One route line drawn on one face photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopoAnnotation {
    pub face_id: EntityId,
    pub area: String,
    pub topo_line: Vec<Point>,
    /// Spline tension; `None` means the renderer's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topo_tension: Option<f64>,
}

// ---------------------------------------------------------------------------
// Crags and routes
// ---------------------------------------------------------------------------

/// A climbing area containing one or more faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crag {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<EntityId>,
}

/// A route record as stored.
///
/// Carries both the legacy single-line fields (`face_id`, `area`,
/// `topo_line`, `topo_tension`) and the newer `topo_annotations` list. Use
/// [`crate::topo::resolve_topo_annotations`] rather than reading either
/// representation directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: EntityId,
    pub name: String,
    pub grade: String,
    pub crag_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topo_line: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topo_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topo_annotations: Option<Vec<TopoAnnotation>>,
}
