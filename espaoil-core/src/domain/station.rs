//! Station records: the raw upstream shape and the enriched display model.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, calculate_distance};

/// A numeric field that the upstream service returns inconsistently as
/// either a JSON number or a numeric string ("1.279").
///
/// [`NumberOrString::as_f64`] normalizes both forms. An unparseable
/// string yields `f64::NAN` - the single, documented fallback for
/// malformed input, so downstream code never sees a panic or a silent
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    /// The numeric value, or NaN if the string form does not parse.
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberOrString::Number(n) => *n,
            NumberOrString::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for NumberOrString {
    fn from(value: f64) -> Self {
        NumberOrString::Number(value)
    }
}

impl From<String> for NumberOrString {
    fn from(value: String) -> Self {
        NumberOrString::Text(value)
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        NumberOrString::Text(value.to_string())
    }
}

/// A station record as returned by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRaw {
    pub trader: String,
    pub name: String,
    pub town: String,
    pub municipality: String,
    pub schedule: String,
    pub price: NumberOrString,
    pub latitude: NumberOrString,
    pub longitude: NumberOrString,
}

/// A station enriched with normalized numeric fields and the distance
/// from the query point, immutable once constructed.
///
/// Serializes with the raw fields flattened alongside the computed ones,
/// so the persisted shape matches what the upstream record looked like
/// plus `numericLat`/`numericLon`/`numericPrice`/`distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDisplay {
    #[serde(flatten)]
    pub raw: StationRaw,
    pub numeric_lat: f64,
    pub numeric_lon: f64,
    pub numeric_price: f64,
    /// Distance from the query point in kilometres.
    pub distance: f64,
}

impl StationDisplay {
    /// Normalize a raw record against the query point.
    ///
    /// Pure: the result depends only on the record and the origin.
    /// Malformed numeric strings propagate as NaN through the normalized
    /// fields and the distance.
    pub fn from_raw(raw: StationRaw, origin: GeoPoint) -> Self {
        let numeric_lat = raw.latitude.as_f64();
        let numeric_lon = raw.longitude.as_f64();
        let numeric_price = raw.price.as_f64();
        let distance = calculate_distance(origin, GeoPoint::new(numeric_lat, numeric_lon));

        Self {
            raw,
            numeric_lat,
            numeric_lon,
            numeric_price,
            distance,
        }
    }
}
