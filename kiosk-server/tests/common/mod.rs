//! Shared upstream fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

/// 2024-03-15T11:00:00Z.
pub const OBSERVED_AT: i64 = 1_710_500_400;

/// 2024-03-15T05:40:23Z; 06:40 local with the +1h offset the fixtures
/// use.
pub const SUNRISE: i64 = 1_710_481_223;

/// 2024-03-15T17:45:10Z; 18:45 local.
pub const SUNSET: i64 = 1_710_524_710;

/// A realistic OpenWeatherMap current conditions body for Stockholm.
pub fn current_body() -> Value {
    json!({
        "coord": {"lon": 18.0686, "lat": 59.3293},
        "weather": [
            {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}
        ],
        "base": "stations",
        "main": {
            "temp": 21.64,
            "feels_like": 21.09,
            "temp_min": 19.82,
            "temp_max": 23.0,
            "pressure": 1015,
            "humidity": 53
        },
        "visibility": 10000,
        "wind": {"speed": 3.14, "deg": 220},
        "clouds": {"all": 0},
        "dt": OBSERVED_AT,
        "sys": {"type": 2, "id": 2011528, "country": "SE", "sunrise": SUNRISE, "sunset": SUNSET},
        "timezone": 3600,
        "id": 2673730,
        "name": "Stockholm",
        "cod": 200
    })
}

/// One 3-hour forecast slot.
pub fn forecast_slot(dt: i64, temp: f64, pop: f64) -> Value {
    json!({
        "dt": dt,
        "main": {
            "temp": temp,
            "feels_like": temp - 1.2,
            "temp_min": temp - 0.5,
            "temp_max": temp + 0.5,
            "pressure": 1014,
            "humidity": 60
        },
        "weather": [
            {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
        ],
        "clouds": {"all": 75},
        "wind": {"speed": 4.26, "deg": 200},
        "visibility": 10000,
        "pop": pop,
        "dt_txt": "2024-03-15 12:00:00"
    })
}

/// An OpenWeatherMap forecast body with the given number of slots.
pub fn forecast_body(slots: usize) -> Value {
    let list: Vec<Value> = (0..slots)
        .map(|i| forecast_slot(OBSERVED_AT + 3600 * (1 + 3 * i as i64), 8.4, 0.35))
        .collect();

    json!({
        "cod": "200",
        "message": 0,
        "cnt": list.len(),
        "list": list,
        "city": {
            "id": 2673730,
            "name": "Stockholm",
            "coord": {"lat": 59.3293, "lon": 18.0686},
            "country": "SE",
            "population": 1515017,
            "timezone": 3600,
            "sunrise": SUNRISE,
            "sunset": SUNSET
        }
    })
}

/// One SL departure with the given direction, mode and line.
pub fn departure(
    destination: &str,
    direction_code: u8,
    mode: &str,
    designation: &str,
    expected: &str,
) -> Value {
    json!({
        "destination": destination,
        "direction_code": direction_code,
        "direction": destination,
        "state": "EXPECTED",
        "display": "3 min",
        "scheduled": expected,
        "expected": expected,
        "journey": {"id": 2024031510052_i64, "state": "NORMALPROGRESS"},
        "stop_area": {"id": 1051, "name": "T-Centralen", "type": "METROSTN"},
        "stop_point": {"id": 1051, "name": "T-Centralen", "designation": "3"},
        "line": {
            "id": 13,
            "designation": designation,
            "transport_mode": mode,
            "group_of_lines": "Tunnelbanans röda linje"
        },
        "deviations": []
    })
}

/// A small SL departures feed: two metro trains and a bus.
pub fn feed_body() -> Value {
    json!({
        "departures": [
            departure("Ropsten", 2, "METRO", "13", "2024-03-15T10:09:00"),
            departure("Norsborg", 1, "METRO", "13", "2024-03-15T10:06:30"),
            departure("Solna centrum", 1, "BUS", "515", "2024-03-15T10:04:00"),
        ],
        "stop_deviations": [
            {
                "importance_level": 5,
                "consequence": "INFORMATION",
                "message": "Hissen vid södra uppgången är avstängd"
            }
        ]
    })
}
