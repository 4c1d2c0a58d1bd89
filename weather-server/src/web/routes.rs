//! HTTP route handlers.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::service::LookupError;

use super::dto::{CwaRequest, SiteRequestError};
use super::state::AppState;

/// Separator between fields in text responses.
const FIELD_SEPARATOR: &str = ", ";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cwa", get(current_weather).post(current_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current weather as one line of text.
///
/// `/cwa?site=臺北` or `/cwa?lat=24.56&lon=120.82`. Both GET and POST read
/// the query string.
async fn current_weather(
    State(state): State<AppState>,
    Query(req): Query<CwaRequest>,
) -> Result<String, AppError> {
    let site = req.site()?;

    let observation = state.service.lookup(&site, &state.api_key).await?;
    info!(?site, found = observation.is_some(), "weather lookup");

    Ok(state
        .formatter
        .format(observation.as_ref(), Some(FIELD_SEPARATOR)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
}

impl From<SiteRequestError> for AppError {
    fn from(e: SiteRequestError) -> Self {
        let message = match e {
            SiteRequestError::Missing => "Bad Request".to_string(),
            SiteRequestError::InvalidCoordinate(v) => {
                format!("Bad Request: invalid coordinate {v}")
            }
        };
        AppError::BadRequest { message }
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => {
                error!(%message, "lookup failed");
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        (status, message).into_response()
    }
}
