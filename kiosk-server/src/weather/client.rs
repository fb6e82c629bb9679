//! OpenWeatherMap HTTP client.
//!
//! Thin async wrapper over the two endpoints the kiosk uses: current
//! conditions and the 5 day / 3 hour forecast. Authentication is the
//! `appid` query parameter; `units=metric` is always requested.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

use super::types::{CurrentWeatherResponse, ForecastResponse};

/// Default base URL for the OpenWeatherMap API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key sent as the `appid` query parameter
    pub api_key: String,
    /// Latitude to query
    pub latitude: f64,
    /// Longitude to query
    pub longitude: f64,
    /// Base URL for the API (defaults to production OpenWeatherMap)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Create a new config with the given API key and coordinates.
    pub fn new(api_key: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            api_key: api_key.into(),
            latitude,
            longitude,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenWeatherMap API client.
///
/// Each call is a single request with a hard timeout and no retries; a
/// slow upstream surfaces as an error rather than a hung kiosk.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
}

impl WeatherClient {
    /// Create a new weather client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            latitude: config.latitude,
            longitude: config.longitude,
        })
    }

    /// Fetch current conditions for the configured coordinates.
    pub async fn fetch_current(&self) -> Result<CurrentWeatherResponse, FetchError> {
        self.get_json("weather").await
    }

    /// Fetch the 5 day / 3 hour forecast for the configured coordinates.
    pub async fn fetch_forecast(&self) -> Result<ForecastResponse, FetchError> {
        self.get_json("forecast").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", self.latitude.to_string()),
                ("lon", self.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| FetchError::Schema {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
