use crate::domain::GeoLocation;
use crate::proximity::DEFAULT_RADIUS_KM;
use config::{Config, ConfigError};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    #[serde(default)]
    search: Search,
    catalog: Catalog,
    location: GeoLocation,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Layers `{name}` (required), `{name}_local` (optional) and `REST_AREAS__`-prefixed environment variables.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(config::Environment::with_prefix("REST_AREAS").prefix_separator("__").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn geo_location(&self) -> &GeoLocation {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(deserialize_with = "deserialize_level")]
    log_level: Level,
}

impl Core {
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse()
        .map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"one of trace, debug, info, warn or error"))
}

#[derive(Debug, Deserialize)]
pub struct Search {
    radius_km: f64,
}

impl Search {
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for Search {
    fn default() -> Self {
        Search {
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    path: String,
}

impl Catalog {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { log_level: Level::DEBUG },
                search: Search::default(),
                catalog: Catalog {
                    path: "rest_areas.json".to_string(),
                },
                location: GeoLocation {
                    latitude: 35.681236,
                    longitude: 139.767125,
                },
            },
        }
    }

    pub fn radius_km(mut self, radius_km: f64) -> Self {
        self.config.search.radius_km = radius_km;
        self
    }

    pub fn catalog_path(mut self, path: String) -> Self {
        self.config.catalog.path = path;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
