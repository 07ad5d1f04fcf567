//! Source trait and the repository that normalizes fetched records.

use tracing::error;

use crate::domain::{FuelType, StationDisplay, StationRaw};
use crate::geo::GeoPoint;

use super::error::RepositoryError;

/// Parameters of one nearby-stations lookup.
#[derive(Debug, Clone, Copy)]
pub struct StationQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_km: f64,
    pub fuel_type: FuelType,
}

impl StationQuery {
    /// The query point as a geo point.
    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// The search radius in metres, as the wire protocol expects.
    pub fn distance_metres(&self) -> f64 {
        self.radius_km * 1000.0
    }
}

/// Something that can produce raw station records for a query.
///
/// Implemented by the HTTP client and the synthetic generator; tests
/// script their own implementations.
pub trait StationSource {
    async fn fetch_raw(&self, query: &StationQuery) -> Result<Vec<StationRaw>, RepositoryError>;
}

/// Fetches raw records through a source and converts them to the
/// display model.
pub struct StationRepository<S> {
    source: S,
}

impl<S: StationSource> StationRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch stations near the query point, enriched with normalized
    /// numerics and distance.
    ///
    /// Source failures are logged here before propagating, so every
    /// failed search leaves a diagnostic trail regardless of what the
    /// caller does with the error.
    pub async fn get_nearby_stations(
        &self,
        query: &StationQuery,
    ) -> Result<Vec<StationDisplay>, RepositoryError> {
        let raw = match self.source.fetch_raw(query).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "failed to fetch gas stations");
                return Err(e);
            }
        };

        let origin = query.origin();
        Ok(raw
            .into_iter()
            .map(|record| StationDisplay::from_raw(record, origin))
            .collect())
    }
}
