//! HTTP client for the remote price service.

use crate::domain::StationRaw;

use super::error::RepositoryError;
use super::source::{StationQuery, StationSource};

/// Configuration for the price service client.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL of the service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the remote `gas-stations/near` endpoint.
#[derive(Debug, Clone)]
pub struct HttpStationSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStationSource {
    /// Create a new client.
    pub fn new(config: HttpSourceConfig) -> Result<Self, RepositoryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl StationSource for HttpStationSource {
    /// `GET {base}/gas-stations/near?lat=..&lon=..&distance=..&gasType=..`
    ///
    /// `distance` is the radius in metres - a protocol detail the rest
    /// of the crate never sees, everything else speaks kilometres.
    async fn fetch_raw(&self, query: &StationQuery) -> Result<Vec<StationRaw>, RepositoryError> {
        let url = format!("{}/gas-stations/near", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", query.lat.to_string()),
                ("lon", query.lon.to_string()),
                ("distance", query.distance_metres().to_string()),
                ("gasType", query.fuel_type.as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            } else {
                message
            };
            return Err(RepositoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RepositoryError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HttpSourceConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpSourceConfig::new("http://localhost:8080").with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let source = HttpStationSource::new(HttpSourceConfig::new("http://localhost:8080"));
        assert!(source.is_ok());
    }
}
