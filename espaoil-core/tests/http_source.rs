//! Integration tests for `HttpStationSource`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test, so no real
//! network traffic is made. Covers the query protocol (radius in
//! metres, fuel code on the wire), both numeric encodings of the
//! response fields, and the error paths.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use espaoil_core::domain::FuelType;
use espaoil_core::repository::{
    HttpSourceConfig, HttpStationSource, RepositoryError, StationQuery, StationRepository,
    StationSource,
};

fn test_source(base_url: &str) -> HttpStationSource {
    HttpStationSource::new(HttpSourceConfig::new(base_url).with_timeout(5))
        .expect("failed to build HttpStationSource")
}

fn madrid_query() -> StationQuery {
    StationQuery {
        lat: 40.4168,
        lon: -3.7038,
        radius_km: 20.0,
        fuel_type: FuelType::Gasolina95E5,
    }
}

/// Two stations as the real service returns them: one with string
/// numerics, one with plain numbers.
fn two_station_body() -> serde_json::Value {
    json!([
        {
            "trader": "REPSOL",
            "name": "ESTACIÓN DE SERVICIO REPSOL",
            "town": "MADRID",
            "municipality": "MADRID",
            "schedule": "L-D: 24H",
            "price": "1.499",
            "latitude": "40.4200",
            "longitude": "-3.7000"
        },
        {
            "trader": "CEPSA",
            "name": "ESTACIÓN DE SERVICIO CEPSA",
            "town": "MADRID",
            "municipality": "MADRID",
            "schedule": "L-S: 07:00-23:00",
            "price": 1.45,
            "latitude": 40.41,
            "longitude": -3.71
        }
    ])
}

#[tokio::test]
async fn sends_the_wire_protocol_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .and(query_param("lat", "40.4168"))
        .and(query_param("lon", "-3.7038"))
        .and(query_param("distance", "20000"))
        .and(query_param("gasType", "GASOLINA_95_E5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let result = source.fetch_raw(&madrid_query()).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn parses_string_and_number_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_station_body()))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let stations = source.fetch_raw(&madrid_query()).await.unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].price.as_f64(), 1.499);
    assert_eq!(stations[0].latitude.as_f64(), 40.42);
    assert_eq!(stations[1].price.as_f64(), 1.45);
    assert_eq!(stations[1].longitude.as_f64(), -3.71);
}

#[tokio::test]
async fn repository_enriches_fetched_records_with_distance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_station_body()))
        .mount(&server)
        .await;

    let repository = StationRepository::new(test_source(&server.uri()));
    let stations = repository.get_nearby_stations(&madrid_query()).await.unwrap();

    assert_eq!(stations.len(), 2);
    for station in &stations {
        assert!(station.distance > 0.0);
        assert!(station.distance < 20.0);
        assert!(station.numeric_price.is_finite());
    }
}

#[tokio::test]
async fn non_success_status_carries_the_server_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream feed down"))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let result = source.fetch_raw(&madrid_query()).await;

    match result {
        Err(RepositoryError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream feed down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_with_empty_body_uses_the_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let result = source.fetch_raw(&madrid_query()).await;

    match result {
        Err(RepositoryError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gas-stations/near"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
        .mount(&server)
        .await;

    let source = test_source(&server.uri());
    let result = source.fetch_raw(&madrid_query()).await;

    assert!(matches!(result, Err(RepositoryError::Json { .. })));
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    // Nothing listens on this port.
    let source = test_source("http://127.0.0.1:9");
    let result = source.fetch_raw(&madrid_query()).await;

    assert!(matches!(result, Err(RepositoryError::Http(_))));
}
