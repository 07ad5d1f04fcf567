//! The search state machine.

use std::sync::Arc;

use tokio::time::timeout;
use tracing::error;

use crate::config::AppConfig;
use crate::domain::{FuelType, SortBy, StationDisplay};
use crate::location::{
    HIGH_ACCURACY, LOW_ACCURACY, LocationError, LocationProvider, Position, PositionRequest,
};
use crate::repository::{StationQuery, StationRepository, StationSource};
use crate::storage::StateStore;

use super::state::SearchState;

const MSG_GEOLOCATION_UNSUPPORTED: &str =
    "La geolocalización no está soportada por tu navegador.";
const MSG_INSECURE_CONTEXT: &str =
    "Para usar geolocalización en móvil debes abrir la app en HTTPS (o localhost).";
const MSG_SERVER_ERROR: &str = "Error al conectar con el servidor.";

/// Where the current search is in its location-acquisition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    Idle,
    Locating,
    Success,
    Error,
}

/// Owns the search state and drives the whole search flow.
///
/// Generic over the station source and the location provider so the
/// same machine runs against the remote service, the synthetic
/// generator, or scripted test doubles.
pub struct SearchController<S, L> {
    repository: StationRepository<S>,
    locator: L,
    store: Arc<dyn StateStore>,
    state: SearchState,
    location_status: LocationStatus,
    loading: bool,
    user_message: Option<String>,
}

impl<S: StationSource, L: LocationProvider> SearchController<S, L> {
    /// Build a controller, restoring persisted state if a valid
    /// snapshot exists.
    pub fn new(
        repository: StationRepository<S>,
        locator: L,
        store: Arc<dyn StateStore>,
        config: &AppConfig,
    ) -> Self {
        let state = SearchState::restore(store.as_ref(), config);

        Self {
            repository,
            locator,
            store,
            state,
            location_status: LocationStatus::Idle,
            loading: false,
            user_message: None,
        }
    }

    pub fn fuel_type(&self) -> FuelType {
        self.state.fuel_type
    }

    pub fn radius(&self) -> f64 {
        self.state.radius
    }

    pub fn sort_by(&self) -> SortBy {
        self.state.sort_by
    }

    /// Whether a search has completed at least once. Sticky within a
    /// session; resets only when the stored snapshot goes away.
    pub fn searched(&self) -> bool {
        self.state.searched
    }

    pub fn stations(&self) -> &[StationDisplay] {
        &self.state.stations
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn location_status(&self) -> LocationStatus {
        self.location_status
    }

    /// The last user-facing message, if the previous search surfaced one.
    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    pub fn set_fuel_type(&mut self, fuel_type: FuelType) {
        self.state.fuel_type = fuel_type;
        self.persist();
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.state.radius = radius;
        self.persist();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.state.sort_by = sort_by;
        self.persist();
    }

    /// A fresh ordering of the current result set.
    ///
    /// Ascending by normalized price or by distance per the configured
    /// criterion; stable for equal keys; never mutates the stored set.
    /// NaN keys sort after every finite key.
    pub fn sorted_stations(&self) -> Vec<StationDisplay> {
        let mut stations = self.state.stations.clone();
        match self.state.sort_by {
            SortBy::Price => {
                stations.sort_by(|a, b| a.numeric_price.total_cmp(&b.numeric_price));
            }
            SortBy::Distance => stations.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        }
        stations
    }

    /// Run one search: acquire a position, fetch nearby stations,
    /// replace the result set.
    ///
    /// Every exit path clears the busy flag, and no failure escapes
    /// this method - errors end up in `location_status` and
    /// `user_message`. A call made while a search is already running is
    /// ignored.
    pub async fn handle_search(&mut self) {
        if self.loading {
            return;
        }

        self.location_status = LocationStatus::Locating;
        self.loading = true;
        self.user_message = None;

        if !self.locator.supported() {
            self.fail_location(MSG_GEOLOCATION_UNSUPPORTED);
            return;
        }

        if !self.locator.secure_context() {
            self.fail_location(MSG_INSECURE_CONTEXT);
            return;
        }

        let position = match self.acquire_position().await {
            Ok(position) => position,
            Err(e) => {
                self.fail_location(e.user_message());
                return;
            }
        };

        self.location_status = LocationStatus::Success;

        let query = StationQuery {
            lat: position.lat,
            lon: position.lon,
            radius_km: self.state.radius,
            fuel_type: self.state.fuel_type,
        };

        match self.repository.get_nearby_stations(&query).await {
            Ok(stations) => {
                self.state.stations = stations;
                self.state.searched = true;
                self.persist();
            }
            Err(e) => {
                error!(error = %e, "station search failed");
                self.location_status = LocationStatus::Error;
                self.user_message = Some(MSG_SERVER_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    /// Two-tier acquisition: one high-accuracy attempt, then one
    /// low-accuracy attempt. The error of the final attempt is the one
    /// that gets classified for the user.
    async fn acquire_position(&self) -> Result<Position, LocationError> {
        match self.attempt(&HIGH_ACCURACY).await {
            Ok(position) => Ok(position),
            Err(_) => self.attempt(&LOW_ACCURACY).await,
        }
    }

    /// One attempt, with the request's time bound enforced here so a
    /// provider that never resolves cannot wedge the search.
    async fn attempt(&self, request: &PositionRequest) -> Result<Position, LocationError> {
        match timeout(request.timeout, self.locator.current_position(request)).await {
            Ok(result) => result,
            Err(_) => Err(LocationError::Timeout),
        }
    }

    fn fail_location(&mut self, message: &str) {
        self.location_status = LocationStatus::Error;
        self.loading = false;
        self.user_message = Some(message.to_string());
    }

    fn persist(&self) {
        self.state.persist(self.store.as_ref());
    }
}
