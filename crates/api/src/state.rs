use std::sync::Arc;

use boulder_core::catalog::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog snapshot loaded at startup.
    pub catalog: Arc<Catalog>,
}
