use crate::catalog::{CatalogError, CatalogProvider};
use crate::domain::{RankedRestArea, RestArea};
use crate::proximity::{self, InputError, SearchRequest};
use thiserror::Error;
use tracing::{info, instrument};

/// Answers the "list all" and "nearby" use cases on top of a catalog provider.
pub struct RestAreaService<P: CatalogProvider> {
    provider: P,
    radius_km: f64,
}

impl<P: CatalogProvider> RestAreaService<P> {
    pub fn new(provider: P, radius_km: f64) -> Self {
        RestAreaService { provider, radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<RestArea>, ServiceError> {
        let catalog = self.provider.fetch_all_points().await?;
        Ok(proximity::list_all(catalog))
    }

    #[instrument(skip(self))]
    pub async fn nearby(&self, request: &SearchRequest) -> Result<Vec<RankedRestArea>, ServiceError> {
        info!("🔍 Searching rest areas within {} km...", self.radius_km);
        let catalog = self.provider.fetch_all_points().await?;

        let nearby = proximity::search(request.latitude, request.longitude, &catalog, self.radius_km);
        info!("🔍 Searching rest areas within {} km... OK, {} found", self.radius_km, nearby.len());

        Ok(nearby)
    }

    /// Parses a wire-format request and runs [`RestAreaService::nearby`]. The catalog is not fetched for an invalid request.
    pub async fn nearby_json(&self, request: &str) -> Result<Vec<RankedRestArea>, ServiceError> {
        let request = SearchRequest::from_json(request)?;
        self.nearby(&request).await
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid search request: {0}")]
    Input(#[from] InputError),
    #[error("catalog unavailable: {0}")]
    DataAccess(#[from] CatalogError),
}
