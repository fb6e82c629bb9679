//! Process configuration read from the environment.
//!
//! Everything is resolved once at startup so a misconfigured deployment
//! fails before the listener binds, not on the first request.

use std::env;
use std::str::FromStr;

/// Default coordinates: central Stockholm.
const DEFAULT_LAT: f64 = 59.3293;
const DEFAULT_LON: f64 = 18.0686;

/// Default SL site to query for departures (Stockholm City).
const DEFAULT_SITE_ID: &str = "9104";

/// Default TTL for cached weather responses.
const DEFAULT_CACHE_TTL_MINUTES: u64 = 15;

/// Default listen port.
const DEFAULT_PORT: u16 = 3001;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is missing or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key. Required; there is no anonymous access.
    pub weather_api_key: String,

    /// Latitude for weather queries.
    pub latitude: f64,

    /// Longitude for weather queries.
    pub longitude: f64,

    /// How long transformed weather responses stay cached, in minutes.
    pub cache_ttl_minutes: u64,

    /// SL site whose departures the board shows.
    pub transit_site_id: String,

    /// Override for the OpenWeatherMap base URL (tests, proxies).
    pub weather_base_url: Option<String>,

    /// Override for the SL Transport base URL (tests, proxies).
    pub transit_base_url: Option<String>,

    /// Port to listen on.
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `OPENWEATHERMAP_API_KEY` is required; everything else falls back
    /// to a default. A variable that is set but unparseable is an error
    /// rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            weather_api_key: require("OPENWEATHERMAP_API_KEY")?,
            latitude: parse_or("WEATHER_LAT", DEFAULT_LAT)?,
            longitude: parse_or("WEATHER_LON", DEFAULT_LON)?,
            cache_ttl_minutes: parse_or("CACHE_TTL_MINUTES", DEFAULT_CACHE_TTL_MINUTES)?,
            transit_site_id: env::var("TRANSIT_SITE_ID")
                .unwrap_or_else(|_| DEFAULT_SITE_ID.to_string()),
            weather_base_url: env::var("WEATHER_BASE_URL").ok(),
            transit_base_url: env::var("TRANSIT_BASE_URL").ok(),
            port: parse_or("PORT", DEFAULT_PORT)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw.clone(),
        }),
        Err(_) => Ok(default),
    }
}
