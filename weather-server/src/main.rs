use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use weather_server::config::ServerConfig;
use weather_server::cwa::CwaClient;
use weather_server::format::Formatter;
use weather_server::service::WeatherService;
use weather_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let client = match CwaClient::new(config.cwa.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create CWA client: {e}");
            std::process::exit(1);
        }
    };

    // The station directory loads on the first lookup
    let service = WeatherService::new(client);
    let state = AppState::new(service, config.api_key, Formatter::new(config.language));
    let app = create_router(state);

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("CWA weather listening on http://{}", config.bind_addr);
    info!("  GET|POST /cwa?site=NAME      - Weather by station name");
    info!("  GET|POST /cwa?lat=..&lon=..  - Weather at the nearest station");
    info!("  GET      /health             - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
