//! Position provider trait and per-attempt request configuration.

use std::time::Duration;

use crate::geo::GeoPoint;

use super::error::LocationError;

/// Configuration for a single position acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    /// Request the most accurate position the platform can provide.
    pub high_accuracy: bool,

    /// Upper bound on how long the attempt may take. The controller
    /// enforces this bound even if the provider never resolves.
    pub timeout: Duration,

    /// Oldest cached position the attempt will accept.
    pub maximum_age: Duration,
}

/// First attempt: high accuracy, ~10 s bound, no cached position reuse.
pub const HIGH_ACCURACY: PositionRequest = PositionRequest {
    high_accuracy: true,
    timeout: Duration::from_secs(10),
    maximum_age: Duration::ZERO,
};

/// Fallback attempt: low accuracy, ~20 s bound, cached positions up to
/// 60 s old accepted.
pub const LOW_ACCURACY: PositionRequest = PositionRequest {
    high_accuracy: false,
    timeout: Duration::from_secs(20),
    maximum_age: Duration::from_secs(60),
};

/// A resolved device position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn as_geo_point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Source of device positions.
///
/// `supported` and `secure_context` mirror the host platform's
/// capability and execution-context preconditions; both default to
/// available, and the controller checks them before any attempt.
pub trait LocationProvider {
    /// Whether geolocation exists on this host at all.
    fn supported(&self) -> bool {
        true
    }

    /// Whether the execution context is allowed to use geolocation
    /// (HTTPS or local-loopback-equivalent).
    fn secure_context(&self) -> bool {
        true
    }

    /// Attempt to acquire the current position.
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<Position, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_constants() {
        assert!(HIGH_ACCURACY.high_accuracy);
        assert_eq!(HIGH_ACCURACY.timeout, Duration::from_secs(10));
        assert_eq!(HIGH_ACCURACY.maximum_age, Duration::ZERO);

        assert!(!LOW_ACCURACY.high_accuracy);
        assert_eq!(LOW_ACCURACY.timeout, Duration::from_secs(20));
        assert_eq!(LOW_ACCURACY.maximum_age, Duration::from_secs(60));
    }
}
