//! Application configuration.

use std::path::PathBuf;

use crate::domain::FuelType;

/// Search radius used when nothing is persisted or configured.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 20.0;

/// Fuel type used when nothing is persisted or configured.
pub const DEFAULT_FUEL_TYPE: FuelType = FuelType::Gasolina95E5;

/// Top-level application configuration.
///
/// `api_base_url` selects the data source at construction time: when it
/// is absent the synthetic generator serves search results instead of
/// the remote price service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the price service; `None` means synthetic data.
    pub api_base_url: Option<String>,

    /// Search radius applied when no persisted state exists.
    pub default_radius_km: f64,

    /// Fuel type applied when no persisted state exists.
    pub default_fuel_type: FuelType,

    /// Directory for the persisted state files.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            default_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            default_fuel_type: DEFAULT_FUEL_TYPE,
            data_dir: PathBuf::from(".espaoil"),
        }
    }
}

impl AppConfig {
    /// Build a configuration from the environment.
    ///
    /// * `ESPAOIL_API_URL` - price service base URL; empty or unset
    ///   selects the synthetic source
    /// * `ESPAOIL_RADIUS_KM` - default search radius
    /// * `ESPAOIL_FUEL_TYPE` - default fuel type code
    /// * `ESPAOIL_DATA_DIR` - persisted state directory
    ///
    /// Malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = std::env::var("ESPAOIL_API_URL")
            .ok()
            .filter(|url| !url.is_empty());

        let default_radius_km = std::env::var("ESPAOIL_RADIUS_KM")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.default_radius_km);

        let default_fuel_type = std::env::var("ESPAOIL_FUEL_TYPE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.default_fuel_type);

        let data_dir = std::env::var("ESPAOIL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Self {
            api_base_url,
            default_radius_km,
            default_fuel_type,
            data_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, None);
        assert_eq!(config.default_radius_km, 20.0);
        assert_eq!(config.default_fuel_type, FuelType::Gasolina95E5);
        assert_eq!(config.data_dir, PathBuf::from(".espaoil"));
    }
}
