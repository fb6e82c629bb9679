//! SL Transport HTTP client.
//!
//! Fetches the departures feed for one fixed site. The feed is served
//! fresh on every call; only the rate-limited weather API gets a cache.

use crate::error::FetchError;

use super::types::DeparturesResponse;

/// Default base URL for the SL Transport API.
const DEFAULT_BASE_URL: &str = "https://transport.integration.sl.se/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the transit client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// SL site to query, e.g. "9104"
    pub site_id: String,
    /// Base URL for the API (defaults to production SL Transport)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransitConfig {
    /// Create a new config for the given site.
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
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

/// SL Transport API client for one site.
#[derive(Debug, Clone)]
pub struct TransitClient {
    http: reqwest::Client,
    base_url: String,
    site_id: String,
}

impl TransitClient {
    /// Create a new transit client with the given configuration.
    pub fn new(config: TransitConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            site_id: config.site_id,
        })
    }

    /// Fetch the current departures feed for the configured site.
    pub async fn fetch_departures(&self) -> Result<DeparturesResponse, FetchError> {
        let url = format!("{}/sites/{}/departures", self.base_url, self.site_id);

        let response = self.http.get(&url).send().await?;

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
