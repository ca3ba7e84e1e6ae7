mod in_memory;
mod json_file;

use crate::domain::RestArea;
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use in_memory::InMemoryCatalog;
pub use json_file::JsonFileCatalog;

/// Source of the rest area catalog. Every call returns the full catalog, no filtering happens at this level.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_all_points(&self) -> Result<Vec<RestArea>, CatalogError>;
}

#[async_trait]
impl<T: CatalogProvider + ?Sized> CatalogProvider for Box<T> {
    async fn fetch_all_points(&self) -> Result<Vec<RestArea>, CatalogError> {
        (**self).fetch_all_points().await
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("could not parse catalog '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
}
