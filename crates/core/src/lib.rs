//! `boulder-core` -- domain logic for crag, face and route topo data.
//!
//! Everything here is pure and synchronous so it can be shared by the HTTP
//! layer and any future CLI or import tooling without pulling in a runtime.

pub mod catalog;
pub mod error;
pub mod face;
pub mod grade;
pub mod overlay;
pub mod search;
pub mod topo;
pub mod types;
pub mod validation;
