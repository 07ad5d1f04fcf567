//! Fixed-coordinate position provider.

use super::error::LocationError;
use super::provider::{LocationProvider, Position, PositionRequest};

/// Provider that always resolves to one configured position.
///
/// This is the production stand-in on hosts without a position feed:
/// the coordinates come from configuration (or the environment) and
/// every attempt succeeds immediately.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    position: Position,
}

impl FixedLocationProvider {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            position: Position::new(lat, lon),
        }
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<Position, LocationError> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::HIGH_ACCURACY;

    #[tokio::test]
    async fn resolves_configured_coordinates() {
        let provider = FixedLocationProvider::new(40.4168, -3.7038);
        let position = provider.current_position(&HIGH_ACCURACY).await.unwrap();

        assert_eq!(position.lat, 40.4168);
        assert_eq!(position.lon, -3.7038);
    }

    #[test]
    fn capability_defaults() {
        let provider = FixedLocationProvider::new(0.0, 0.0);
        assert!(provider.supported());
        assert!(provider.secure_context());
    }
}
