// crates/geocode-core/src/model.rs
use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the nations file.
///
/// Only `name` is required. Every other key, `lat`/`lon` included, lives in
/// `extra` and is written back as it was read. Enrichment overwrites the
/// two coordinate keys in place (or appends them when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Numeric `lat`, if present. Text or `null` values read as `None`.
    pub fn lat(&self) -> Option<f64> {
        self.extra.get("lat").and_then(Value::as_f64)
    }

    /// Numeric `lon`, if present. Text or `null` values read as `None`.
    pub fn lon(&self) -> Option<f64> {
        self.extra.get("lon").and_then(Value::as_f64)
    }

    /// Returns the coordinates if both halves are numeric.
    pub fn point(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            lat: self.lat()?,
            lon: self.lon()?,
        })
    }

    pub fn set_point(&mut self, point: GeoPoint) {
        self.extra.insert("lat".to_string(), Value::from(point.lat));
        self.extra.insert("lon".to_string(), Value::from(point.lon));
    }

    pub fn is_enriched(&self) -> bool {
        self.point().is_some()
    }
}

/// One result row returned by the geocoder.
///
/// Nominatim sends coordinates as text (`"lat": "51.0834196"`); the
/// remaining fields of a result are ignored apart from `display_name`,
/// which only shows up in logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub lat: String,
    pub lon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Candidate {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
            display_name: None,
        }
    }

    /// Parses the text coordinates into a [`GeoPoint`].
    pub fn point(&self) -> Result<GeoPoint> {
        Ok(GeoPoint {
            lat: parse_coordinate("lat", &self.lat)?,
            lon: parse_coordinate("lon", &self.lon)?,
        })
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}
