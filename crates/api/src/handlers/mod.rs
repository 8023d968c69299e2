pub mod crag;
pub mod overlay;
pub mod topo;
