use crate::domain::GeoLocation;
use serde_json::{Map, Value};
use thiserror::Error;

/// A nearby search request in wire format: `{"latitude": <number>, "longitude": <number>}`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SearchRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl SearchRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        SearchRequest { latitude, longitude }
    }

    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let value = serde_json::from_str::<Value>(json)?;
        Self::from_value(&value)
    }

    /// Coordinates are not range checked, only their presence and type.
    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        let Some(object) = value.as_object() else {
            return Err(InputError::NotAnObject(value.to_string()));
        };

        Ok(SearchRequest {
            latitude: numeric_field(object, "latitude")?,
            longitude: numeric_field(object, "longitude")?,
        })
    }
}

impl From<GeoLocation> for SearchRequest {
    fn from(location: GeoLocation) -> Self {
        SearchRequest::new(location.latitude, location.longitude)
    }
}

fn numeric_field(object: &Map<String, Value>, field: &'static str) -> Result<f64, InputError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(InputError::MissingField(field)),
        Some(value) => value.as_f64().ok_or_else(|| InputError::NotNumeric {
            field,
            value: value.to_string(),
        }),
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}' must be a number, found {value}")]
    NotNumeric { field: &'static str, value: String },
    #[error("request must be a JSON object, found {0}")]
    NotAnObject(String),
    #[error("malformed request: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
