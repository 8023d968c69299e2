//! In-memory crag/face/route catalog.
//!
//! The catalog is a read-only snapshot exported from the document store.
//! It is checked once on load and then only queried.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::face::Face;
use crate::types::{Crag, Route};

/// A loaded catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub crags: Vec<Crag>,
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Catalog {
    /// Parse and check a JSON snapshot.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let catalog: Catalog = serde_json::from_slice(bytes)
            .map_err(|e| CoreError::Validation(format!("Invalid catalog JSON: {e}")))?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Check referential integrity.
    ///
    /// - crag, face and route ids are unique
    /// - every face and route points at a known crag
    ///
    /// Route topo data is not validated here: stored data is served as-is
    /// and undrawable lines simply resolve to no annotation.
    pub fn check(&self) -> Result<(), CoreError> {
        let mut crag_ids = HashSet::new();
        for crag in &self.crags {
            if !crag_ids.insert(crag.id.as_str()) {
                return Err(CoreError::Conflict(format!("Duplicate crag id '{}'", crag.id)));
            }
        }

        let mut face_ids = HashSet::new();
        for face in &self.faces {
            if !face_ids.insert(face.id.as_str()) {
                return Err(CoreError::Conflict(format!("Duplicate face id '{}'", face.id)));
            }
            if !crag_ids.contains(face.crag_id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Face '{}' references unknown crag '{}'",
                    face.id, face.crag_id
                )));
            }
        }

        let mut route_ids = HashSet::new();
        for route in &self.routes {
            if !route_ids.insert(route.id.as_str()) {
                return Err(CoreError::Conflict(format!("Duplicate route id '{}'", route.id)));
            }
            if !crag_ids.contains(route.crag_id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Route '{}' references unknown crag '{}'",
                    route.id, route.crag_id
                )));
            }
        }

        Ok(())
    }

    pub fn crag(&self, id: &str) -> Result<&Crag, CoreError> {
        self.crags
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Crag",
                id: id.to_string(),
            })
    }

    pub fn route(&self, id: &str) -> Result<&Route, CoreError> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Route",
                id: id.to_string(),
            })
    }

    /// Routes of a crag in catalog order. Errors if the crag is unknown.
    pub fn routes_for_crag(&self, crag_id: &str) -> Result<Vec<Route>, CoreError> {
        self.crag(crag_id)?;
        Ok(self
            .routes
            .iter()
            .filter(|r| r.crag_id == crag_id)
            .cloned()
            .collect())
    }

    /// Faces of a crag in catalog order. Errors if the crag is unknown.
    pub fn faces_for_crag(&self, crag_id: &str) -> Result<Vec<Face>, CoreError> {
        self.crag(crag_id)?;
        Ok(self
            .faces
            .iter()
            .filter(|f| f.crag_id == crag_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn snapshot() -> serde_json::Value {
        json!({
            "crags": [
                {"id": "c1", "name": "Baihe"},
                {"id": "c2", "name": "Yangshuo", "cityId": "guilin"}
            ],
            "faces": [
                {"id": "f1", "cragId": "c1", "area": "主墙", "imageUrl": "https://img/f1.jpg"}
            ],
            "routes": [
                {
                    "id": "r1", "name": "Moonwalk", "grade": "V3", "cragId": "c1",
                    "area": "主墙", "faceId": "f1",
                    "topoLine": [{"x": 0.1, "y": 0.9}, {"x": 0.2, "y": 0.1}]
                },
                {"id": "r2", "name": "Sidepull", "grade": "？", "cragId": "c1"},
                {"id": "r3", "name": "Karst", "grade": "V6", "cragId": "c2"}
            ]
        })
    }

    fn load(value: serde_json::Value) -> Result<Catalog, CoreError> {
        Catalog::from_json_slice(&serde_json::to_vec(&value).unwrap())
    }

    #[test]
    fn loads_valid_snapshot() {
        let catalog = load(snapshot()).unwrap();
        assert_eq!(catalog.crags.len(), 2);
        assert_eq!(catalog.faces.len(), 1);
        assert_eq!(catalog.routes.len(), 3);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = load(json!({})).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Catalog::from_json_slice(b"{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid catalog JSON"));
    }

    #[test]
    fn duplicate_route_id_conflicts() {
        let mut value = snapshot();
        value["routes"][1]["id"] = json!("r1");
        assert_matches!(load(value), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn route_with_unknown_crag_rejected() {
        let mut value = snapshot();
        value["routes"][2]["cragId"] = json!("nowhere");
        let err = load(value).unwrap_err();
        assert!(err.to_string().contains("unknown crag 'nowhere'"));
    }

    #[test]
    fn undrawable_topo_line_is_loaded_as_is() {
        let mut value = snapshot();
        value["routes"][0]["topoLine"] = json!([{"x": 0.1, "y": 0.9}]);
        let catalog = load(value).unwrap();
        assert_eq!(catalog.route("r1").unwrap().topo_line.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn face_with_unknown_crag_rejected() {
        let mut value = snapshot();
        value["faces"][0]["cragId"] = json!("c9");
        assert_matches!(load(value), Err(CoreError::Validation(_)));
    }

    #[test]
    fn lookups_find_entities() {
        let catalog = load(snapshot()).unwrap();
        assert_eq!(catalog.crag("c2").unwrap().name, "Yangshuo");
        assert_eq!(catalog.route("r2").unwrap().grade, "？");
        assert_eq!(catalog.routes_for_crag("c1").unwrap().len(), 2);
        assert_eq!(catalog.faces_for_crag("c2").unwrap().len(), 0);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = load(snapshot()).unwrap();
        assert_matches!(
            catalog.route("missing"),
            Err(CoreError::NotFound { entity: "Route", .. })
        );
        assert_matches!(catalog.routes_for_crag("missing"), Err(CoreError::NotFound { .. }));
    }
}
