//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::transit::{Departure, Deviation};
use crate::weather::WeatherCacheStats;

/// Query parameters for the departures endpoints.
#[derive(Debug, Deserialize)]
pub struct DeparturesQuery {
    /// Optional transport mode filter (e.g. "metro", "BUS")
    pub transport: Option<String>,

    /// Optional substring filter on direction or destination
    pub direction: Option<String>,

    /// Sort option: "time", "line" or "transport" (defaults to time)
    pub sort: Option<String>,

    /// Sort order: "asc" or "desc" (defaults to asc)
    pub order: Option<String>,
}

/// Departure board split into the stop's two directions.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Departures with direction code 1
    pub direction1: Vec<Departure>,

    /// Departures with direction code 2
    pub direction2: Vec<Departure>,

    /// Deviations affecting the whole stop
    pub stop_deviations: Vec<Deviation>,
}

/// Response for the weather cache statistics endpoint.
#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    /// Per-cache entry counts and configured TTL
    pub cache: WeatherCacheStats,

    /// When the statistics were read (ISO 8601)
    pub timestamp: String,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server can respond
    pub status: &'static str,

    /// Current server time (ISO 8601)
    pub timestamp: String,

    /// Server version
    pub version: &'static str,
}

/// Response for the liveness probe.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    /// Always "ok" when the server can respond
    pub status: &'static str,

    /// Whether the process is alive
    pub alive: bool,

    /// Current server time (ISO 8601)
    pub timestamp: String,
}

/// Response for the readiness probe.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Always "ok" when the server can respond
    pub status: &'static str,

    /// Whether the server is ready to accept traffic
    pub ready: bool,

    /// Current server time (ISO 8601)
    pub timestamp: String,
}

/// Index of the API, served at the root path.
#[derive(Debug, Serialize)]
pub struct ServiceIndex {
    /// Service name
    pub name: &'static str,

    /// Server version
    pub version: &'static str,

    /// Available endpoints by purpose
    pub endpoints: EndpointIndex,
}

/// Endpoint paths listed in the service index.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIndex {
    /// Health check path
    pub health: &'static str,

    /// Current weather path
    pub current_weather: &'static str,

    /// Hourly forecast path
    pub forecast: &'static str,

    /// Weather cache statistics path
    pub cache_stats: &'static str,

    /// Departures list path
    pub departures: &'static str,

    /// Departure board path
    pub departure_board: &'static str,
}

/// Error response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: &'static str,

    /// Human-readable description
    pub message: String,

    /// HTTP status code, repeated in the body
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse_query(uri: &str) -> DeparturesQuery {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) = Query::<DeparturesQuery>::try_from_uri(&uri).unwrap();
        query
    }

    #[test]
    fn departures_query_from_url_params() {
        let query =
            parse_query("/api/departures?transport=metro&direction=Kungstr%C3%A4dg%C3%A5rden");

        assert_eq!(query.transport.as_deref(), Some("metro"));
        assert_eq!(query.direction.as_deref(), Some("Kungsträdgården"));
        assert_eq!(query.sort, None);
        assert_eq!(query.order, None);
    }

    #[test]
    fn departures_query_all_fields() {
        let query = parse_query("/api/departures?transport=BUS&direction=City&sort=line&order=desc");

        assert_eq!(query.transport.as_deref(), Some("BUS"));
        assert_eq!(query.direction.as_deref(), Some("City"));
        assert_eq!(query.sort.as_deref(), Some("line"));
        assert_eq!(query.order.as_deref(), Some("desc"));
    }

    #[test]
    fn error_response_serializes_camel_case() {
        let body = ErrorResponse {
            error: "bad_request",
            message: "unknown transport mode: boat".to_string(),
            status_code: 400,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "bad_request");
        assert_eq!(json["statusCode"], 400);
        assert!(json.get("status_code").is_none());
    }

    #[test]
    fn board_response_shape() {
        let board = BoardResponse {
            direction1: Vec::new(),
            direction2: Vec::new(),
            stop_deviations: Vec::new(),
        };

        let json = serde_json::to_value(&board).unwrap();
        assert!(json["direction1"].is_array());
        assert!(json["direction2"].is_array());
        assert!(json["stop_deviations"].is_array());
    }
}
