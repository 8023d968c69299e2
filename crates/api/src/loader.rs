//! Catalog snapshot loading.

use std::path::Path;

use boulder_core::catalog::Catalog;

use crate::error::{AppError, AppResult};

/// Read and check the catalog snapshot at `path`.
pub async fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::InternalError(format!("Failed to read catalog {}: {e}", path.display()))
    })?;

    let catalog = Catalog::from_json_slice(&bytes)?;

    tracing::info!(
        path = %path.display(),
        crags = catalog.crags.len(),
        faces = catalog.faces.len(),
        routes = catalog.routes.len(),
        "Catalog loaded",
    );

    Ok(catalog)
}
