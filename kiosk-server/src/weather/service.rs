//! Cached weather service.
//!
//! Wraps a [`WeatherClient`] with one TTL cache per endpoint. Reads go
//! cache first; a miss fetches, transforms and stores. Failed fetches
//! cache nothing, so the next request retries the upstream.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{CacheStats, TtlCache};
use crate::error::FetchError;

use super::client::WeatherClient;
use super::convert::{transform_current_weather, transform_forecast};
use super::types::{CurrentWeather, HourlyForecast};

/// Cache key for current conditions.
const CURRENT_WEATHER_KEY: &str = "current_weather";

/// Cache key for the hourly forecast.
const HOURLY_FORECAST_KEY: &str = "hourly_forecast";

/// Stats for both weather caches, as served by the cache-stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCacheStats {
    pub current_weather: CacheStats,
    pub forecast: CacheStats,
}

/// Weather client with caching and transformation.
///
/// The cache holds transformed kiosk-shaped values, not raw upstream
/// responses. No lock is held while a fetch is in flight; two concurrent
/// misses may both hit the upstream and the later write wins.
pub struct WeatherService {
    client: WeatherClient,
    current_cache: TtlCache<CurrentWeather>,
    forecast_cache: TtlCache<HourlyForecast>,
}

impl WeatherService {
    /// Create a new service; both caches share the same TTL.
    pub fn new(client: WeatherClient, cache_ttl_minutes: u64) -> Self {
        Self {
            client,
            current_cache: TtlCache::new(cache_ttl_minutes),
            forecast_cache: TtlCache::new(cache_ttl_minutes),
        }
    }

    /// Get current weather, from cache if fresh.
    pub async fn current_weather(&self) -> Result<CurrentWeather, FetchError> {
        if let Some(cached) = self.current_cache.get(CURRENT_WEATHER_KEY) {
            debug!("returning cached current weather");
            return Ok(cached);
        }

        info!("fetching current weather from OpenWeatherMap");
        let response = self.client.fetch_current().await?;
        let transformed = transform_current_weather(&response, Utc::now());

        self.current_cache
            .set(CURRENT_WEATHER_KEY, transformed.clone());

        Ok(transformed)
    }

    /// Get the hourly forecast, from cache if fresh.
    pub async fn hourly_forecast(&self) -> Result<HourlyForecast, FetchError> {
        if let Some(cached) = self.forecast_cache.get(HOURLY_FORECAST_KEY) {
            debug!("returning cached hourly forecast");
            return Ok(cached);
        }

        info!("fetching hourly forecast from OpenWeatherMap");
        let response = self.client.fetch_forecast().await?;
        let transformed = transform_forecast(&response, Utc::now());

        self.forecast_cache
            .set(HOURLY_FORECAST_KEY, transformed.clone());

        Ok(transformed)
    }

    /// Stats for both caches.
    pub fn cache_stats(&self) -> WeatherCacheStats {
        WeatherCacheStats {
            current_weather: self.current_cache.stats(),
            forecast: self.forecast_cache.stats(),
        }
    }

    /// Drop everything cached; the next reads hit the upstream.
    pub fn clear_cache(&self) {
        self.current_cache.clear();
        self.forecast_cache.clear();
    }
}
