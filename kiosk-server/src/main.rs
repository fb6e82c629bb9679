use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_server::config::Config;
use kiosk_server::transit::{TransitClient, TransitConfig};
use kiosk_server::weather::{WeatherClient, WeatherConfig, WeatherService};
use kiosk_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Read configuration from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Create the weather client and its caching service
    let mut weather_config =
        WeatherConfig::new(&config.weather_api_key, config.latitude, config.longitude);
    if let Some(url) = &config.weather_base_url {
        weather_config = weather_config.with_base_url(url);
    }
    let weather_client =
        WeatherClient::new(weather_config).expect("Failed to create weather client");
    let weather = WeatherService::new(weather_client, config.cache_ttl_minutes);

    // Create the transit client
    let mut transit_config = TransitConfig::new(&config.transit_site_id);
    if let Some(url) = &config.transit_base_url {
        transit_config = transit_config.with_base_url(url);
    }
    let transit = TransitClient::new(transit_config).expect("Failed to create transit client");

    // Build app state and router
    let state = AppState::new(weather, transit);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Kiosk server listening on http://{addr}");
    info!(
        "Serving departures for site {}, weather cached for {} minutes",
        config.transit_site_id, config.cache_ttl_minutes
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
