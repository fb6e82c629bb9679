//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::FetchError;
use crate::transit::{
    DeparturesResponse, SortConfig, SortOption, SortOrder, TransportMode,
    filter_by_direction, filter_by_transport_mode, partition_by_direction, sort_departures,
};
use crate::weather::{CurrentWeather, HourlyForecast};

use super::dto::*;
use super::state::AppState;

/// Service name reported by the index endpoint.
const SERVICE_NAME: &str = "kiosk-server";

/// Server version reported by the index and health endpoints.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .route("/api/weather/current", get(current_weather))
        .route("/api/weather/forecast", get(hourly_forecast))
        .route("/api/weather/cache-stats", get(weather_cache_stats))
        .route("/api/departures", get(departures))
        .route("/api/departures/board", get(departure_board))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Index listing the available endpoints.
async fn index() -> Json<ServiceIndex> {
    Json(ServiceIndex {
        name: SERVICE_NAME,
        version: VERSION,
        endpoints: EndpointIndex {
            health: "/health",
            current_weather: "/api/weather/current",
            forecast: "/api/weather/forecast",
            cache_stats: "/api/weather/cache-stats",
            departures: "/api/departures",
            departure_board: "/api/departures/board",
        },
    })
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: iso_timestamp(),
        version: VERSION,
    })
}

/// Liveness probe.
async fn health_live() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        alive: true,
        timestamp: iso_timestamp(),
    })
}

/// Readiness probe.
async fn health_ready() -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ok",
        ready: true,
        timestamp: iso_timestamp(),
    })
}

/// Current weather, served from cache while an earlier fetch is fresh.
async fn current_weather(
    State(state): State<AppState>,
) -> Result<Json<CurrentWeather>, AppError> {
    let weather = state.weather.current_weather().await?;
    Ok(Json(weather))
}

/// Hourly forecast, served from cache while an earlier fetch is fresh.
async fn hourly_forecast(
    State(state): State<AppState>,
) -> Result<Json<HourlyForecast>, AppError> {
    let forecast = state.weather.hourly_forecast().await?;
    Ok(Json(forecast))
}

/// Entry counts and TTL for the weather caches.
async fn weather_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        cache: state.weather.cache_stats(),
        timestamp: iso_timestamp(),
    })
}

/// Departures for the configured site, filtered and sorted per the query.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<DeparturesQuery>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let filters = DepartureFilters::parse(&req)?;
    let feed = state.transit.fetch_departures().await?;

    let list = filter_by_transport_mode(feed.departures, filters.mode);
    let list = filter_by_direction(list, filters.direction.as_deref());
    let list = sort_departures(list, filters.sort);

    Ok(Json(DeparturesResponse {
        departures: list,
        stop_deviations: feed.stop_deviations,
    }))
}

/// Departure board split by direction code, filtered and sorted per the
/// query.
async fn departure_board(
    State(state): State<AppState>,
    Query(req): Query<DeparturesQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let filters = DepartureFilters::parse(&req)?;
    let feed = state.transit.fetch_departures().await?;

    let list = filter_by_transport_mode(feed.departures, filters.mode);
    let list = filter_by_direction(list, filters.direction.as_deref());
    let list = sort_departures(list, filters.sort);
    let board = partition_by_direction(list);

    Ok(Json(BoardResponse {
        direction1: board.direction1,
        direction2: board.direction2,
        stop_deviations: feed.stop_deviations,
    }))
}

/// Fallback for unknown routes.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("Route {} not found", uri.path()),
    }
}

/// Current time as an ISO 8601 timestamp with millisecond precision.
fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Validated filter and sort settings for a departures request.
#[derive(Debug)]
struct DepartureFilters {
    mode: Option<TransportMode>,
    direction: Option<String>,
    sort: SortConfig,
}

impl DepartureFilters {
    /// Validate raw query parameters, rejecting unknown tokens.
    fn parse(req: &DeparturesQuery) -> Result<Self, AppError> {
        let mode = req
            .transport
            .as_deref()
            .map(TransportMode::parse)
            .transpose()
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;

        let option = req
            .sort
            .as_deref()
            .map(SortOption::parse)
            .transpose()
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?
            .unwrap_or_default();

        let order = req
            .order
            .as_deref()
            .map(SortOrder::parse)
            .transpose()
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?
            .unwrap_or_default();

        Ok(Self {
            mode,
            direction: req.direction.clone(),
            sort: SortConfig {
                option,
                direction: order,
            },
        })
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Schema { message: String },
    Timeout { message: String },
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        if e.is_timeout() {
            return AppError::Timeout {
                message: e.to_string(),
            };
        }
        match e {
            FetchError::Schema { .. } => AppError::Schema {
                message: e.to_string(),
            },
            FetchError::Upstream { .. } | FetchError::Http(_) => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, kind, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, "bad_request", message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, "not_found", message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, "upstream_error", message),
            AppError::Schema { message } => {
                (StatusCode::BAD_GATEWAY, "schema_validation_error", message)
            }
            AppError::Timeout { message } => {
                (StatusCode::GATEWAY_TIMEOUT, "gateway_timeout", message)
            }
        };

        if status.is_server_error() {
            error!("[{status}] {message}");
        } else {
            warn!("[{status}] {message}");
        }

        let body = Json(ErrorResponse {
            error: kind,
            message,
            status_code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
