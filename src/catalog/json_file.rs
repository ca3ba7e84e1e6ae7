use crate::catalog::{CatalogError, CatalogProvider};
use crate::domain::RestArea;
use crate::extensions::path_ext::FileName;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Reads the catalog from a JSON array of rest areas. The file is read again on every fetch.
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileCatalog { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_all_points(&self) -> Result<Vec<RestArea>, CatalogError> {
        info!("📁 Loading rest areas from '{}'...", self.path.string_file_name());
        let content = fs::read_to_string(&self.path).await.map_err(|e| CatalogError::Io {
            source: e,
            path: self.path.clone(),
        })?;

        let rest_areas = serde_json::from_str::<Vec<RestArea>>(&content).map_err(|e| CatalogError::Parse {
            source: e,
            path: self.path.clone(),
        })?;

        info!("📁 Loading rest areas from '{}'... OK, {} found", self.path.string_file_name(), rest_areas.len());
        Ok(rest_areas)
    }
}
