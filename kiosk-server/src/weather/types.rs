//! OpenWeatherMap API response DTOs and the kiosk-facing weather types.
//!
//! The upstream types map directly to the OpenWeatherMap JSON responses;
//! anything missing or mistyped there is a schema validation failure, not
//! a silently-defaulted field. The domain types at the bottom are what the
//! kiosk actually renders, serialized in camelCase.

use serde::{Deserialize, Serialize};

/// Response from the `/weather` (current conditions) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Coordinates the reading is for.
    pub coord: Coord,

    /// Weather conditions. Usually one entry; may be empty.
    pub weather: Vec<WeatherCondition>,

    /// Temperature, pressure and humidity readings.
    pub main: MainReadings,

    /// Wind readings.
    pub wind: Wind,

    /// Cloud cover.
    pub clouds: Clouds,

    /// Unix timestamp of the reading.
    pub dt: i64,

    /// Sunrise and sunset times.
    pub sys: Sys,

    /// Shift from UTC in seconds for the location.
    pub timezone: i32,

    /// Location name.
    pub name: String,
}

/// Response from the `/forecast` (5 day / 3 hour) endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Forecast entries at 3-hour intervals.
    pub list: Vec<ForecastEntry>,

    /// The location the forecast is for.
    pub city: City,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the slot.
    pub dt: i64,

    /// Predicted temperature, pressure and humidity.
    pub main: MainReadings,

    /// Predicted conditions. Usually one entry; may be empty.
    pub weather: Vec<WeatherCondition>,

    /// Predicted cloud cover.
    pub clouds: Clouds,

    /// Predicted wind.
    pub wind: Wind,

    /// Probability of precipitation, 0.0 to 1.0.
    pub pop: f64,

    /// Human-readable slot time ("2024-03-15 12:00:00").
    pub dt_txt: String,
}

/// A weather condition (id, group, description, icon code).
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,

    /// Lowercase description, e.g. "clear sky".
    pub description: String,

    /// Icon code, e.g. "01d".
    pub icon: String,
}

/// The `main` block shared by current weather and forecast entries.
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Temperature in Celsius (with `units=metric`).
    pub temp: f64,

    /// Perceived temperature in Celsius.
    pub feels_like: f64,

    pub temp_min: f64,
    pub temp_max: f64,

    /// Atmospheric pressure in hPa.
    pub pressure: u32,

    /// Relative humidity percentage.
    pub humidity: u8,
}

/// Wind readings.
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s (with `units=metric`).
    pub speed: f64,

    /// Direction in degrees. Omitted when calm.
    pub deg: Option<f64>,
}

/// Cloud cover block.
#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    /// Cloudiness percentage.
    pub all: u8,
}

/// Sunrise and sunset block of the current weather response.
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub country: Option<String>,

    /// Sunrise as a unix timestamp (UTC).
    pub sunrise: i64,

    /// Sunset as a unix timestamp (UTC).
    pub sunset: i64,
}

/// Coordinates block.
#[derive(Debug, Clone, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// City block of the forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,

    /// Shift from UTC in seconds for the location.
    pub timezone: i32,

    pub sunrise: i64,
    pub sunset: i64,
}

/// Current conditions as the kiosk renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Temperature in whole degrees Celsius.
    pub temperature: i32,

    /// Perceived temperature in whole degrees Celsius.
    pub feels_like: i32,

    /// Relative humidity percentage.
    pub humidity: u8,

    /// Capitalized condition description, e.g. "Clear sky".
    pub description: String,

    /// OpenWeatherMap icon code.
    pub icon: String,

    /// Wind speed in m/s, one decimal.
    pub wind_speed: f64,

    /// Atmospheric pressure in hPa.
    pub pressure: u32,

    /// Cloudiness percentage.
    pub clouds: u8,

    /// Local sunrise time, "HH:MM".
    pub sunrise: String,

    /// Local sunset time, "HH:MM".
    pub sunset: String,

    /// Location name.
    pub location: String,

    /// When this value was produced (ISO 8601, UTC).
    pub timestamp: String,
}

/// One rendered forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecastItem {
    /// Local slot time, "HH:MM".
    pub time: String,

    /// Temperature in whole degrees Celsius.
    pub temperature: i32,

    /// Perceived temperature in whole degrees Celsius.
    pub feels_like: i32,

    /// Capitalized condition description.
    pub description: String,

    /// OpenWeatherMap icon code.
    pub icon: String,

    /// Probability of precipitation as a whole percentage.
    pub precipitation: u8,

    /// Relative humidity percentage.
    pub humidity: u8,

    /// Wind speed in m/s, one decimal.
    pub wind_speed: f64,
}

/// The next 24 hours of forecast as the kiosk renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    /// Location name.
    pub location: String,

    /// Up to eight 3-hour slots.
    pub hours: Vec<HourlyForecastItem>,

    /// When this value was produced (ISO 8601, UTC).
    pub timestamp: String,
}
