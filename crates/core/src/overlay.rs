//! Overlay mode selection for the route detail view.
//!
//! Given the viewed route and the routes that share its face, decides
//! whether the face photo shows a single line, a carousel over the route's
//! own annotations, or a composite overlay of every sibling's line.
//!
//! [`derive_overlay_mode`] is pure. [`OverlaySession`] owns the one piece of
//! mutable state (the "show all" toggle) for a single viewing session and
//! must be passed explicitly to whoever renders that view.

use serde::Serialize;

use crate::topo::{has_legacy_topo_line, resolve_topo_annotations};
use crate::types::{EntityId, Point, Route, TopoAnnotation};

/// Up to this many sibling lines are composited without asking the user.
///
/// Beyond it, the composite overlay is opt-in via the toggle.
pub const SHOW_ALL_BY_DEFAULT_MAX_LINES: usize = 3;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A sibling route's line, projected for the composite overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiblingLine {
    pub id: EntityId,
    pub name: String,
    pub grade: String,
    pub topo_line: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topo_tension: Option<f64>,
}

/// The rendering path the overlay bundle resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayKind {
    None,
    SingleLine,
    MultiAnnotation,
    MultiLine,
}

impl OverlayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SingleLine => "singleLine",
            Self::MultiAnnotation => "multiAnnotation",
            Self::MultiLine => "multiLine",
        }
    }
}

/// Everything the rendering layer needs to pick and draw an overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayMode {
    /// The route's legacy `topo_line` is drawable (see
    /// [`has_legacy_topo_line`]).
    pub has_topo_line: bool,
    pub has_multi_annotations: bool,
    pub topo_annotations: Vec<TopoAnnotation>,
    pub valid_sibling_routes: Vec<SiblingLine>,
    pub has_multi_lines: bool,
    pub should_show_all_by_default: bool,
    pub show_all_overlay: bool,
    pub use_multi_line_mode: bool,
}

impl OverlayMode {
    /// Collapse the booleans into one rendering path.
    pub fn kind(&self) -> OverlayKind {
        if self.use_multi_line_mode {
            OverlayKind::MultiLine
        } else if self.has_multi_annotations {
            OverlayKind::MultiAnnotation
        } else if self.has_topo_line || !self.topo_annotations.is_empty() {
            OverlayKind::SingleLine
        } else {
            OverlayKind::None
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Project the siblings that carry a drawable legacy line.
///
/// With zero or one sibling there is nothing to composite, so the result is
/// empty regardless of line validity.
pub fn valid_sibling_lines(siblings: &[Route]) -> Vec<SiblingLine> {
    if siblings.len() <= 1 {
        return Vec::new();
    }

    siblings
        .iter()
        .filter_map(|r| match r.topo_line.as_deref() {
            Some(line) if has_legacy_topo_line(r) => Some(SiblingLine {
                id: r.id.clone(),
                name: r.name.clone(),
                grade: r.grade.clone(),
                topo_line: line.to_vec(),
                topo_tension: r.topo_tension,
            }),
            _ => None,
        })
        .collect()
}

/// Whether the composite overlay shows without the user opting in.
pub fn should_show_all_by_default(valid_sibling_count: usize) -> bool {
    valid_sibling_count <= SHOW_ALL_BY_DEFAULT_MAX_LINES
}

/// Derive the overlay bundle for `route` (or for nothing while loading).
///
/// `show_all_overlay` is the user's manual toggle; it only matters when the
/// face has more than [`SHOW_ALL_BY_DEFAULT_MAX_LINES`] valid sibling lines.
pub fn derive_overlay_mode(
    route: Option<&Route>,
    siblings: &[Route],
    show_all_overlay: bool,
) -> OverlayMode {
    let has_topo_line = route.is_some_and(has_legacy_topo_line);
    let topo_annotations = route
        .map(|r| resolve_topo_annotations(r).into_owned())
        .unwrap_or_default();
    let has_multi_annotations = topo_annotations.len() > 1;

    let valid_sibling_routes = valid_sibling_lines(siblings);
    let has_multi_lines = valid_sibling_routes.len() > 1 && has_topo_line;

    let show_by_default = should_show_all_by_default(valid_sibling_routes.len());
    let effective_show_all = show_by_default || show_all_overlay;
    let use_multi_line_mode = has_multi_lines && effective_show_all;

    OverlayMode {
        has_topo_line,
        has_multi_annotations,
        topo_annotations,
        valid_sibling_routes,
        has_multi_lines,
        should_show_all_by_default: show_by_default,
        show_all_overlay,
        use_multi_line_mode,
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Toggle state for one route-viewing session.
///
/// Starts collapsed. The only transitions are an explicit
/// [`toggle_show_all_overlay`](Self::toggle_show_all_overlay) and the reset
/// that happens when [`view_route`](Self::view_route) sees a different route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlaySession {
    route_id: Option<EntityId>,
    show_all_overlay: bool,
}

impl OverlaySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the currently viewed route, resetting the toggle if it changed.
    pub fn view_route(&mut self, route: Option<&Route>) {
        let next = route.map(|r| r.id.as_str());
        if self.route_id.as_deref() != next {
            self.route_id = next.map(str::to_owned);
            self.show_all_overlay = false;
        }
    }

    /// Flip the manual "show all lines" toggle.
    pub fn toggle_show_all_overlay(&mut self) {
        self.show_all_overlay = !self.show_all_overlay;
    }

    pub fn show_all_overlay(&self) -> bool {
        self.show_all_overlay
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// View `route` and derive its overlay bundle using this session's toggle.
    pub fn overlay_mode(&mut self, route: Option<&Route>, siblings: &[Route]) -> OverlayMode {
        self.view_route(route);
        derive_overlay_mode(route, siblings, self.show_all_overlay)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
