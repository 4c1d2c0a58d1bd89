//! Web layer for the weather service.
//!
//! A plain-text endpoint over [`WeatherService`](crate::service::WeatherService).

mod dto;
mod routes;
mod state;

pub use dto::{CwaRequest, SiteRequestError};
pub use routes::{AppError, create_router};
pub use state::AppState;
