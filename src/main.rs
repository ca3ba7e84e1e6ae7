use crate::app_config::AppConfig;
use crate::catalog::{CatalogProvider, InMemoryCatalog, JsonFileCatalog};
use crate::proximity::{InputError, SearchRequest};
use crate::service::{RestAreaService, ServiceError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, info};

mod app_config;
mod catalog;
mod domain;
mod extensions;
mod geo;
mod geo_location_deserializer;
mod proximity;
mod service;

#[derive(Parser, Debug)]
#[command(name = "rest-areas")]
#[command(about = "List rest areas or find the ones near a location, nearest first.", long_about = None)]
struct Cli {
    /// Catalog JSON file, overrides `catalog.path` from the configuration
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Use the built-in sample catalog instead of a catalog file
    #[arg(long, global = true, default_value_t = false, conflicts_with = "catalog")]
    sample: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every rest area in the catalog
    List,

    /// Print the rest areas within the search radius, nearest first.
    /// Without coordinates or a request the configured location is used.
    #[command(allow_negative_numbers = true)]
    Search {
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,

        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,

        /// Search request as JSON, e.g. '{"latitude": 35.6881, "longitude": 139.9926}'
        #[arg(short, long, conflicts_with_all = ["latitude", "longitude"])]
        request: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.core().log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let provider = catalog_provider(cli.catalog, cli.sample, &config);
    let service = RestAreaService::new(provider, config.search().radius_km());

    let output = match cli.command {
        Command::List => service.list_all().await.map(|rest_areas| serde_json::to_string_pretty(&rest_areas)),
        Command::Search { request: Some(json), .. } => service.nearby_json(&json).await.map(|nearby| serde_json::to_string_pretty(&nearby)),
        Command::Search { latitude, longitude, .. } => match search_request(latitude, longitude, &config) {
            Ok(request) => {
                debug!("Resolved search request {:?} within {} km", request, service.radius_km());
                service.nearby(&request).await.map(|nearby| serde_json::to_string_pretty(&nearby))
            }
            Err(e) => Err(ServiceError::from(e)),
        },
    };

    match output {
        Ok(json) => {
            println!("{}", json?);
            Ok(())
        }
        Err(e) => {
            error!("❌ {}", e);
            Err(e.into())
        }
    }
}

fn catalog_provider(catalog: Option<PathBuf>, sample: bool, config: &AppConfig) -> Box<dyn CatalogProvider> {
    if sample {
        info!("✅  Using the sample catalog");
        return Box::new(InMemoryCatalog::sample());
    }

    let path = catalog.unwrap_or_else(|| config.catalog().path().to_path_buf());
    info!("✅  Using catalog '{}'", path.display());
    Box::new(JsonFileCatalog::new(path))
}

fn search_request(latitude: Option<f64>, longitude: Option<f64>, config: &AppConfig) -> Result<SearchRequest, InputError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(SearchRequest::new(latitude, longitude)),
        (None, None) => Ok(SearchRequest::from(*config.geo_location())),
        (None, Some(_)) => Err(InputError::MissingField("latitude")),
        (Some(_), None) => Err(InputError::MissingField("longitude")),
    }
}
