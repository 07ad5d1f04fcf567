//! Synthetic station generator for development without a price service.

use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::domain::{NumberOrString, StationRaw};

use super::error::RepositoryError;
use super::source::{StationQuery, StationSource};

const TRADERS: [&str; 8] = [
    "REPSOL", "CEPSA", "BP", "GALP", "SHELL", "PLENOIL", "BALLENOIL", "AVIA",
];

const SCHEDULES: [&str; 3] = ["L-D: 24H", "L-D: 06:00-22:00", "L-S: 07:00-23:00"];

/// Kilometres per degree of latitude; longitude scales by cos(lat).
const KM_PER_DEGREE: f64 = 111.0;

/// Simulated network latency before a synthetic response resolves.
const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Generator of plausible random station records.
///
/// Serves 5 to 15 stations scattered within a bounding box approximating
/// the requested radius, with prices in the realistic [1.300, 1.700)
/// band. Selected at construction time whenever no API base URL is
/// configured.
pub struct SyntheticStationSource {
    latency: Duration,
}

impl SyntheticStationSource {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (tests use zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for SyntheticStationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StationSource for SyntheticStationSource {
    async fn fetch_raw(&self, query: &StationQuery) -> Result<Vec<StationRaw>, RepositoryError> {
        warn!("no API base URL configured, serving synthetic station data");

        tokio::time::sleep(self.latency).await;

        let mut rng = rand::rng();
        let count = rng.random_range(5..=15);

        let lat_span = query.radius_km / KM_PER_DEGREE;
        let lon_span = query.radius_km / (KM_PER_DEGREE * query.lat.to_radians().cos());

        let mut stations = Vec::with_capacity(count);
        for _ in 0..count {
            let trader = TRADERS[rng.random_range(0..TRADERS.len())];
            let schedule = SCHEDULES[rng.random_range(0..SCHEDULES.len())];
            let latitude = query.lat + rng.random_range(-lat_span..=lat_span);
            let longitude = query.lon + rng.random_range(-lon_span..=lon_span);
            // The real service mostly returns prices as strings; the
            // generator does the same so the string path stays exercised.
            let price = format!("{:.3}", rng.random_range(1.300..1.700));

            stations.push(StationRaw {
                trader: trader.to_string(),
                name: format!("ESTACIÓN DE SERVICIO {trader} (MOCK)"),
                town: "CIUDAD SIMULADA".to_string(),
                municipality: "MUNICIPIO DE PRUEBA".to_string(),
                schedule: schedule.to_string(),
                price: NumberOrString::Text(price),
                latitude: NumberOrString::Number(latitude),
                longitude: NumberOrString::Number(longitude),
            });
        }

        Ok(stations)
    }
}
