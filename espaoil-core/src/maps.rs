//! Navigation hand-off to an external map application.
//!
//! The core does not navigate anywhere itself; it produces a deep-link
//! URL for the user's preferred provider. The preference lives in the
//! same best-effort storage namespace as the search state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::{MAP_PROVIDER_KEY, StateStore};

/// Error returned when parsing an unknown map provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown map provider: {0}")]
pub struct InvalidMapProvider(String);

/// Supported navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    Google,
    Apple,
    Waze,
}

/// Provider used when nothing valid is stored.
pub const DEFAULT_MAP_PROVIDER: MapProvider = MapProvider::Google;

impl MapProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapProvider::Google => "google",
            MapProvider::Apple => "apple",
            MapProvider::Waze => "waze",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapProvider::Google => "Google Maps",
            MapProvider::Apple => "Apple Maps",
            MapProvider::Waze => "Waze",
        }
    }
}

impl FromStr for MapProvider {
    type Err = InvalidMapProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(MapProvider::Google),
            "apple" => Ok(MapProvider::Apple),
            "waze" => Ok(MapProvider::Waze),
            other => Err(InvalidMapProvider(other.to_string())),
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the provider-specific navigation URL for a destination.
pub fn build_map_url(provider: MapProvider, lat: f64, lon: f64) -> String {
    let destination = format!("{lat},{lon}");

    match provider {
        MapProvider::Apple => format!("https://maps.apple.com/?daddr={destination}&dirflg=d"),
        MapProvider::Waze => format!("https://www.waze.com/ul?ll={destination}&navigate=yes"),
        MapProvider::Google => {
            format!("https://www.google.com/maps/dir/?api=1&destination={destination}")
        }
    }
}

/// Read the stored provider preference, defaulting on anything invalid.
pub fn load_map_provider(store: &dyn StateStore) -> MapProvider {
    store
        .get(MAP_PROVIDER_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_MAP_PROVIDER)
}

/// Store the provider preference, best-effort.
pub fn store_map_provider(store: &dyn StateStore, provider: MapProvider) {
    store.put(MAP_PROVIDER_KEY, provider.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn provider_urls() {
        assert_eq!(
            build_map_url(MapProvider::Google, 40.42, -3.7),
            "https://www.google.com/maps/dir/?api=1&destination=40.42,-3.7"
        );
        assert_eq!(
            build_map_url(MapProvider::Apple, 40.42, -3.7),
            "https://maps.apple.com/?daddr=40.42,-3.7&dirflg=d"
        );
        assert_eq!(
            build_map_url(MapProvider::Waze, 40.42, -3.7),
            "https://www.waze.com/ul?ll=40.42,-3.7&navigate=yes"
        );
    }

    #[test]
    fn preference_roundtrips() {
        let store = MemoryStore::new();
        assert_eq!(load_map_provider(&store), MapProvider::Google);

        store_map_provider(&store, MapProvider::Waze);
        assert_eq!(load_map_provider(&store), MapProvider::Waze);
    }

    #[test]
    fn garbage_preference_defaults() {
        let store = MemoryStore::new();
        store.put(MAP_PROVIDER_KEY, "bing");
        assert_eq!(load_map_provider(&store), MapProvider::Google);
    }

    #[test]
    fn labels() {
        assert_eq!(MapProvider::Google.label(), "Google Maps");
        assert_eq!(MapProvider::Apple.label(), "Apple Maps");
        assert_eq!(MapProvider::Waze.label(), "Waze");
    }
}
