use crate::domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// A named point of interest as supplied by a catalog provider.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RestArea {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl RestArea {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

/// A rest area annotated with its distance to the query location, in kilometers rounded to two decimals.
///
/// Serializes as the flattened rest area with an extra `distance` field.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RankedRestArea {
    #[serde(flatten)]
    pub rest_area: RestArea,
    #[serde(rename = "distance")]
    pub distance_km: f64,
}
