//! Shared application state.

use std::sync::Arc;

use crate::transit::TransitClient;
use crate::weather::WeatherService;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Weather service with its response caches
    pub weather: Arc<WeatherService>,

    /// Client for the transit departures feed
    pub transit: Arc<TransitClient>,
}

impl AppState {
    /// Create application state from the underlying services.
    pub fn new(weather: WeatherService, transit: TransitClient) -> Self {
        Self {
            weather: Arc::new(weather),
            transit: Arc::new(transit),
        }
    }
}
