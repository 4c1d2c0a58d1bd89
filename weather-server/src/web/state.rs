//! Application state for the web layer.

use std::sync::Arc;

use crate::format::Formatter;
use crate::service::WeatherService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Weather lookups (owns the station directory)
    pub service: Arc<WeatherService>,

    /// CWA API key used for every lookup
    pub api_key: Arc<str>,

    /// Response rendering
    pub formatter: Formatter,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        service: WeatherService,
        api_key: impl Into<Arc<str>>,
        formatter: Formatter,
    ) -> Self {
        Self {
            service: Arc::new(service),
            api_key: api_key.into(),
            formatter,
        }
    }
}
