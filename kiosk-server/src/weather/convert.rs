//! Conversion from OpenWeatherMap DTOs to kiosk weather types.
//!
//! All functions here are pure: the caller supplies the wall-clock time
//! stamped onto the result, so tests are deterministic.

use chrono::{DateTime, SecondsFormat, Utc};

use super::types::{
    CurrentWeather, CurrentWeatherResponse, ForecastResponse, HourlyForecast, HourlyForecastItem,
    WeatherCondition,
};

/// How many forecast slots the kiosk shows: 8 slots at 3-hour intervals
/// cover the next 24 hours.
const FORECAST_SLOTS: usize = 8;

/// Description used when the upstream conditions array is empty.
const FALLBACK_DESCRIPTION: &str = "Unknown";

/// Icon used when the upstream conditions array is empty.
const FALLBACK_ICON: &str = "01d";

/// Transform a current weather response into the kiosk shape.
///
/// `now` becomes the `timestamp` field, formatted as ISO 8601 with
/// millisecond precision.
pub fn transform_current_weather(
    data: &CurrentWeatherResponse,
    now: DateTime<Utc>,
) -> CurrentWeather {
    CurrentWeather {
        temperature: round_whole(data.main.temp),
        feels_like: round_whole(data.main.feels_like),
        humidity: data.main.humidity,
        description: condition_description(&data.weather),
        icon: condition_icon(&data.weather),
        wind_speed: round_to_tenth(data.wind.speed),
        pressure: data.main.pressure,
        clouds: data.clouds.all,
        sunrise: format_local_time(data.sys.sunrise, data.timezone),
        sunset: format_local_time(data.sys.sunset, data.timezone),
        location: data.name.clone(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Transform a forecast response into the kiosk shape.
///
/// Keeps the first [`FORECAST_SLOTS`] entries; slot times are shifted into
/// the location's timezone.
pub fn transform_forecast(data: &ForecastResponse, now: DateTime<Utc>) -> HourlyForecast {
    let hours = data
        .list
        .iter()
        .take(FORECAST_SLOTS)
        .map(|entry| HourlyForecastItem {
            time: format_local_time(entry.dt, data.city.timezone),
            temperature: round_whole(entry.main.temp),
            feels_like: round_whole(entry.main.feels_like),
            description: condition_description(&entry.weather),
            icon: condition_icon(&entry.weather),
            precipitation: round_percentage(entry.pop),
            humidity: entry.main.humidity,
            wind_speed: round_to_tenth(entry.wind.speed),
        })
        .collect();

    HourlyForecast {
        location: data.city.name.clone(),
        hours,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Format a unix timestamp as "HH:MM" wall-clock time at the given UTC
/// offset. Out-of-range timestamps render as "--:--".
fn format_local_time(unix_secs: i64, offset_secs: i32) -> String {
    match DateTime::from_timestamp(unix_secs.saturating_add(i64::from(offset_secs)), 0) {
        Some(shifted) => shifted.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Capitalized description of the first condition, or a fallback when the
/// array is empty or the description blank.
fn condition_description(conditions: &[WeatherCondition]) -> String {
    match conditions.first().map(|c| c.description.as_str()) {
        Some(description) if !description.is_empty() => capitalize_first(description),
        _ => FALLBACK_DESCRIPTION.to_string(),
    }
}

/// Icon code of the first condition, or a fallback.
fn condition_icon(conditions: &[WeatherCondition]) -> String {
    match conditions.first().map(|c| c.icon.as_str()) {
        Some(icon) if !icon.is_empty() => icon.to_string(),
        _ => FALLBACK_ICON.to_string(),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn round_whole(value: f64) -> i32 {
    value.round() as i32
}

/// Round to one decimal place (wind speeds).
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a 0.0..=1.0 probability to a whole percentage.
fn round_percentage(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::types::{City, Clouds, Coord, ForecastEntry, MainReadings, Sys, Wind};
    use chrono::TimeZone;

    fn condition(description: &str, icon: &str) -> WeatherCondition {
        WeatherCondition {
            id: 800,
            main: "Clear".to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    fn readings(temp: f64, feels_like: f64) -> MainReadings {
        MainReadings {
            temp,
            feels_like,
            temp_min: temp - 1.0,
            temp_max: temp + 1.0,
            pressure: 1018,
            humidity: 52,
        }
    }

    fn current_response() -> CurrentWeatherResponse {
        CurrentWeatherResponse {
            coord: Coord {
                lon: 18.0686,
                lat: 59.3293,
            },
            weather: vec![condition("clear sky", "01d")],
            main: readings(21.64, 19.38),
            wind: Wind {
                speed: 3.14,
                deg: Some(240.0),
            },
            clouds: Clouds { all: 20 },
            dt: 1710500400,
            sys: Sys {
                country: Some("SE".to_string()),
                sunrise: sunrise_utc().timestamp(),
                sunset: sunset_utc().timestamp(),
            },
            timezone: 3600,
            name: "Stockholm".to_string(),
        }
    }

    fn forecast_entry(temp: f64, pop: f64) -> ForecastEntry {
        ForecastEntry {
            dt: Utc
                .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
                .unwrap()
                .timestamp(),
            main: readings(temp, temp - 0.5),
            weather: vec![condition("light rain", "10d")],
            clouds: Clouds { all: 75 },
            wind: Wind {
                speed: 4.26,
                deg: None,
            },
            pop,
            dt_txt: "2024-03-15 12:00:00".to_string(),
        }
    }

    fn forecast_response(entries: Vec<ForecastEntry>) -> ForecastResponse {
        ForecastResponse {
            list: entries,
            city: City {
                name: "Stockholm".to_string(),
                country: "SE".to_string(),
                timezone: 3600,
                sunrise: 1710478823,
                sunset: 1710521097,
            },
        }
    }

    fn sunrise_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 5, 40, 23).unwrap()
    }

    fn sunset_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 17, 24, 57).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 11, 0, 0).unwrap()
    }

    #[test]
    fn current_weather_rounds_and_capitalizes() {
        let result = transform_current_weather(&current_response(), now());

        assert_eq!(result.temperature, 22);
        assert_eq!(result.feels_like, 19);
        assert_eq!(result.humidity, 52);
        assert_eq!(result.description, "Clear sky");
        assert_eq!(result.icon, "01d");
        assert_eq!(result.wind_speed, 3.1);
        assert_eq!(result.pressure, 1018);
        assert_eq!(result.clouds, 20);
        assert_eq!(result.location, "Stockholm");
    }

    #[test]
    fn sunrise_and_sunset_shift_into_local_time() {
        let result = transform_current_weather(&current_response(), now());

        // 05:40 UTC + 3600s offset = 06:40 local.
        assert_eq!(result.sunrise, "06:40");
        assert_eq!(result.sunset, "18:24");
    }

    #[test]
    fn timestamp_is_iso_with_milliseconds() {
        let result = transform_current_weather(&current_response(), now());
        assert_eq!(result.timestamp, "2024-03-15T11:00:00.000Z");
    }

    #[test]
    fn repeat_transforms_differ_only_in_timestamp() {
        let later = Utc.with_ymd_and_hms(2024, 3, 15, 11, 5, 0).unwrap();
        let first = transform_current_weather(&current_response(), now());
        let mut second = transform_current_weather(&current_response(), later);

        assert_eq!(second.timestamp, "2024-03-15T11:05:00.000Z");
        second.timestamp = first.timestamp.clone();
        assert_eq!(second, first);
    }

    #[test]
    fn negative_temperatures_round_to_nearest() {
        let mut response = current_response();
        response.main = readings(-7.8, -12.2);

        let result = transform_current_weather(&response, now());
        assert_eq!(result.temperature, -8);
        assert_eq!(result.feels_like, -12);
    }

    #[test]
    fn empty_conditions_fall_back_to_placeholders() {
        let mut response = current_response();
        response.weather.clear();

        let result = transform_current_weather(&response, now());
        assert_eq!(result.description, "Unknown");
        assert_eq!(result.icon, "01d");
    }

    #[test]
    fn blank_description_falls_back() {
        let mut response = current_response();
        response.weather = vec![condition("", "")];

        let result = transform_current_weather(&response, now());
        assert_eq!(result.description, "Unknown");
        assert_eq!(result.icon, "01d");
    }

    #[test]
    fn swedish_descriptions_capitalize() {
        let mut response = current_response();
        response.weather = vec![condition("åska", "11d")];

        let result = transform_current_weather(&response, now());
        assert_eq!(result.description, "Åska");
    }

    #[test]
    fn forecast_keeps_at_most_eight_slots() {
        let entries: Vec<ForecastEntry> = (0..12).map(|i| forecast_entry(20.0 + i as f64, 0.1)).collect();
        let result = transform_forecast(&forecast_response(entries), now());

        assert_eq!(result.hours.len(), 8);
        assert_eq!(result.hours[0].temperature, 20);
        assert_eq!(result.hours[7].temperature, 27);
    }

    #[test]
    fn short_forecast_keeps_everything() {
        let entries = vec![forecast_entry(20.0, 0.0), forecast_entry(19.0, 0.0)];
        let result = transform_forecast(&forecast_response(entries), now());

        assert_eq!(result.hours.len(), 2);
    }

    #[test]
    fn forecast_slot_fields() {
        let result = transform_forecast(&forecast_response(vec![forecast_entry(18.4, 0.35)]), now());
        let slot = &result.hours[0];

        // 12:00 UTC + 3600s = 13:00 local.
        assert_eq!(slot.time, "13:00");
        assert_eq!(slot.temperature, 18);
        assert_eq!(slot.description, "Light rain");
        assert_eq!(slot.icon, "10d");
        assert_eq!(slot.precipitation, 35);
        assert_eq!(slot.wind_speed, 4.3);
        assert_eq!(result.location, "Stockholm");
    }

    #[test]
    fn precipitation_rounds_to_whole_percent() {
        assert_eq!(round_percentage(0.456), 46);
        assert_eq!(round_percentage(0.0), 0);
        assert_eq!(round_percentage(1.0), 100);
    }

    #[test]
    fn out_of_range_timestamp_renders_placeholder() {
        let mut response = current_response();
        response.sys.sunrise = i64::MAX;
        response.sys.sunset = i64::MIN;

        let result = transform_current_weather(&response, now());
        assert_eq!(result.sunrise, "--:--");
        assert_eq!(result.sunset, "--:--");
    }

    #[test]
    fn negative_offset_shifts_backwards() {
        let mut response = current_response();
        response.timezone = -18000; // UTC-5
        response.sys.sunrise = Utc
            .with_ymd_and_hms(2024, 3, 15, 11, 5, 0)
            .unwrap()
            .timestamp();

        let result = transform_current_weather(&response, now());
        assert_eq!(result.sunrise, "06:05");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Whole-degree rounding never moves a reading by more than
            /// half a degree.
            #[test]
            fn rounding_error_is_bounded(temp in -60.0f64..60.0) {
                let rounded = round_whole(temp);
                prop_assert!((f64::from(rounded) - temp).abs() <= 0.5);
            }

            /// Precipitation percentages stay in 0..=100 for any
            /// probability the API could send.
            #[test]
            fn precipitation_is_a_percentage(pop in 0.0f64..=1.0) {
                prop_assert!(round_percentage(pop) <= 100);
            }

            /// The forecast never renders more than eight slots, whatever
            /// the upstream sends.
            #[test]
            fn forecast_slot_count_is_capped(n in 0usize..20) {
                let entries: Vec<ForecastEntry> =
                    (0..n).map(|_| forecast_entry(20.0, 0.5)).collect();
                let result = transform_forecast(&forecast_response(entries), now());
                prop_assert_eq!(result.hours.len(), n.min(8));
            }

            /// Local-time formatting always yields "HH:MM" within range.
            #[test]
            fn formatted_times_are_hh_mm(unix in 0i64..4_102_444_800, offset in -50_400i32..50_400) {
                let formatted = format_local_time(unix, offset);
                prop_assert_eq!(formatted.len(), 5);
                prop_assert_eq!(formatted.as_bytes()[2], b':');
            }
        }
    }
}
