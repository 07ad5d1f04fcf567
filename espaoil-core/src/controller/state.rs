//! Persisted search state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{FuelType, SortBy, StationDisplay};
use crate::storage::{HOME_STATE_KEY, StateStore};

/// The unit of persistence: everything the home screen needs to survive
/// a reload.
///
/// Serializes to the same camelCase JSON blob the storage key has always
/// held, so existing snapshots keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub fuel_type: FuelType,
    pub radius: f64,
    pub sort_by: SortBy,
    pub stations: Vec<StationDisplay>,
    pub searched: bool,
}

impl SearchState {
    /// The defaults used when no valid snapshot exists.
    pub fn defaults(config: &AppConfig) -> Self {
        Self {
            fuel_type: config.default_fuel_type,
            radius: config.default_radius_km,
            sort_by: SortBy::Price,
            stations: Vec::new(),
            searched: false,
        }
    }

    /// Load the persisted snapshot, or fall back to defaults.
    ///
    /// A snapshot is only accepted when it is structurally valid: known
    /// fuel type, known sort criterion, finite numeric radius, array of
    /// stations, boolean searched flag. Anything else is discarded -
    /// never an error.
    pub fn restore(store: &dyn StateStore, config: &AppConfig) -> Self {
        store
            .get(HOME_STATE_KEY)
            .and_then(|raw| Self::parse_snapshot(&raw))
            .unwrap_or_else(|| Self::defaults(config))
    }

    fn parse_snapshot(raw: &str) -> Option<Self> {
        let state: Self = serde_json::from_str(raw).ok()?;
        // serde_json cannot produce a non-finite f64 from valid JSON,
        // but the snapshot may not have come from us.
        state.radius.is_finite().then_some(state)
    }

    /// Serialize the whole state to storage, best-effort.
    pub fn persist(&self, store: &dyn StateStore) {
        match serde_json::to_string(self) {
            Ok(json) => store.put(HOME_STATE_KEY, &json),
            Err(e) => debug!(error = %e, "state serialization dropped"),
        }
    }
}
