//! Face grouping and sibling lookup.
//!
//! A face is one photographed rock surface. Routes are drawn on faces
//! through their resolved topo annotations, so a route mapped to two faces
//! shows up in two groups.

use serde::{Deserialize, Serialize};

use crate::topo::resolve_topo_annotations;
use crate::types::{EntityId, Point, Route};

/// A photographed face belonging to a crag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub id: EntityId,
    pub crag_id: EntityId,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One route's line on a face.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRoute {
    pub route_id: EntityId,
    pub name: String,
    pub grade: String,
    pub topo_line: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topo_tension: Option<f64>,
}

/// A face together with every route drawn on it. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceGroup {
    pub face_id: EntityId,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub routes: Vec<FaceRoute>,
}

/// Group routes by the faces their annotations are drawn on.
///
/// Groups appear in order of first use; routes within a group keep input
/// order. The face's image URL and area come from `faces` when the face is
/// known, otherwise the area comes from the first annotation seen.
pub fn group_routes_by_face(routes: &[Route], faces: &[Face]) -> Vec<FaceGroup> {
    let mut groups: Vec<FaceGroup> = Vec::new();

    for route in routes {
        for annotation in resolve_topo_annotations(route).iter() {
            let idx = match groups.iter().position(|g| g.face_id == annotation.face_id) {
                Some(idx) => idx,
                None => {
                    let face = faces.iter().find(|f| f.id == annotation.face_id);
                    groups.push(FaceGroup {
                        face_id: annotation.face_id.clone(),
                        area: face
                            .map(|f| f.area.clone())
                            .unwrap_or_else(|| annotation.area.clone()),
                        image_url: face.and_then(|f| f.image_url.clone()),
                        routes: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            groups[idx].routes.push(FaceRoute {
                route_id: route.id.clone(),
                name: route.name.clone(),
                grade: route.grade.clone(),
                topo_line: annotation.topo_line.clone(),
                topo_tension: annotation.topo_tension,
            });
        }
    }

    groups
}

/// Routes sharing `route`'s legacy face, including `route` itself.
///
/// Siblings must be in the same crag. Order follows `routes`. A route with
/// no legacy `face_id` has no siblings.
pub fn face_siblings(route: &Route, routes: &[Route]) -> Vec<Route> {
    let Some(face_id) = route.face_id.as_deref() else {
        return Vec::new();
    };

    routes
        .iter()
        .filter(|r| r.crag_id == route.crag_id && r.face_id.as_deref() == Some(face_id))
        .cloned()
        .collect()
}
