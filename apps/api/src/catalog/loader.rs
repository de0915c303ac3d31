//! Catalog loading. A failed read never reaches the caller: it is logged and
//! replaced by an empty catalog so pages degrade to an empty state.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::models::project::ProjectData;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Projects data file not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read projects data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in projects data file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Where the project dataset comes from.
///
/// Carried in `AppState` as `Arc<dyn CatalogSource>`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn read(&self) -> Result<ProjectData, CatalogError>;
}

/// Reads the dataset from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn read(&self) -> Result<ProjectData, CatalogError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::Missing(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Loads the catalog, falling back to an empty one on any failure.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.read().await {
        Ok(data) => {
            debug!(projects = data.projects.len(), "Loaded project catalog");
            Catalog::new(data.projects)
        }
        Err(e) => {
            error!("{e}");
            Catalog::default()
        }
    }
}
