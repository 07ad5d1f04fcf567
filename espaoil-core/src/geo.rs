//! Great-circle distance and display formatting.
//!
//! Pure helpers with no dependencies on the rest of the crate. Distances
//! are in kilometres, coordinates in decimal degrees.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances below this threshold are formatted in metres.
const METRES_THRESHOLD_KM: f64 = 1.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Used transiently for distance computation; never persisted on its own.
/// No range validation is performed - callers ensure numeric sanity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula. The distance between a point and itself
/// is exactly 0 (within floating-point tolerance), and the result is
/// never negative.
pub fn calculate_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Human-readable distance label.
///
/// Sub-kilometre distances render as whole metres ("850 m"), anything
/// else as kilometres with one decimal ("1.2 km").
pub fn format_distance(km: f64) -> String {
    if km < METRES_THRESHOLD_KM {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.1} km")
    }
}

/// Price label with exactly three decimals, e.g. "1.499".
///
/// The currency unit is a presentation concern and not part of the label.
pub fn format_price(value: f64) -> String {
    format!("{value:.3}")
}
