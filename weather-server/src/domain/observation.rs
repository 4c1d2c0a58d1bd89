//! Normalized weather observation.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// One point-in-time reading for one station.
///
/// The serialized form uses the compact single-letter keys
/// `S`, `C`, `O`, `T`, `H` and `R`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Station name as requested.
    #[serde(rename = "S")]
    pub station: String,

    /// Station location.
    #[serde(rename = "C")]
    pub coordinate: Coordinate,

    /// Local observation time, ISO 8601 without the UTC offset
    /// (e.g. "2025-11-18T11:00:00").
    #[serde(rename = "O")]
    pub observed_at: String,

    /// Air temperature in degrees Celsius.
    #[serde(rename = "T")]
    pub temperature_c: f64,

    /// Relative humidity as a fraction in [0, 1].
    #[serde(rename = "H")]
    pub relative_humidity: f64,

    /// Current precipitation in millimetres.
    #[serde(rename = "R")]
    pub precipitation_mm: f64,
}
