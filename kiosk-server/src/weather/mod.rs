//! OpenWeatherMap integration.
//!
//! Fetches current conditions and the 5 day / 3 hour forecast for a fixed
//! coordinate, transforms them into the shapes the kiosk renders, and
//! caches the transformed values. Key characteristics:
//! - transformed values are cached, never raw upstream responses
//! - sunrise, sunset and slot times are shifted into the location's
//!   timezone and rendered as "HH:MM"
//! - a failed fetch caches nothing

mod client;
mod convert;
mod service;
mod types;

pub use client::{WeatherClient, WeatherConfig};
pub use convert::{transform_current_weather, transform_forecast};
pub use service::{WeatherCacheStats, WeatherService};
pub use types::{
    City, Clouds, Coord, CurrentWeather, CurrentWeatherResponse, ForecastEntry, ForecastResponse,
    HourlyForecast, HourlyForecastItem, MainReadings, Sys, WeatherCondition, Wind,
};
