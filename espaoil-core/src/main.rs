use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use espaoil_core::config::AppConfig;
use espaoil_core::controller::SearchController;
use espaoil_core::geo::{format_distance, format_price};
use espaoil_core::location::FixedLocationProvider;
use espaoil_core::maps::{build_map_url, load_map_provider};
use espaoil_core::repository::{
    HttpSourceConfig, HttpStationSource, StationRepository, StationSource, SyntheticStationSource,
};
use espaoil_core::storage::{FileStore, StateStore};

/// Fallback coordinates when ESPAOIL_LAT/ESPAOIL_LON are not set (Madrid).
const DEFAULT_LAT: f64 = 40.4168;
const DEFAULT_LON: f64 = -3.7038;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(&config.data_dir));

    let lat = env_f64("ESPAOIL_LAT", DEFAULT_LAT);
    let lon = env_f64("ESPAOIL_LON", DEFAULT_LON);
    let locator = FixedLocationProvider::new(lat, lon);

    match config.api_base_url.clone() {
        Some(base_url) => {
            let source = HttpStationSource::new(HttpSourceConfig::new(base_url))
                .expect("failed to create HTTP station source");
            run_search(source, locator, store, &config).await;
        }
        None => {
            let source = SyntheticStationSource::new();
            run_search(source, locator, store, &config).await;
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

async fn run_search<S: StationSource>(
    source: S,
    locator: FixedLocationProvider,
    store: Arc<dyn StateStore>,
    config: &AppConfig,
) {
    let mut controller =
        SearchController::new(StationRepository::new(source), locator, store.clone(), config);

    println!(
        "Buscando estaciones ({}, radio {} km)...",
        controller.fuel_type().label(),
        controller.radius()
    );

    controller.handle_search().await;

    if let Some(message) = controller.user_message() {
        eprintln!("{message}");
        return;
    }

    let stations = controller.sorted_stations();
    println!(
        "{} estaciones, ordenadas por {}:",
        stations.len(),
        controller.sort_by()
    );
    println!();

    for station in &stations {
        println!(
            "  {:>5} €/L  {:>8}  {} - {} ({})",
            format_price(station.numeric_price),
            format_distance(station.distance),
            station.raw.trader,
            station.raw.municipality,
            station.raw.schedule,
        );
    }

    if let Some(best) = stations.first() {
        let provider = load_map_provider(store.as_ref());
        println!();
        println!(
            "Ruta a la más barata ({}): {}",
            provider.label(),
            build_map_url(provider, best.numeric_lat, best.numeric_lon)
        );
    }
}
