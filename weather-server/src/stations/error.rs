//! Station directory error types.

/// Errors from station resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// The directory has no stations to choose from
    #[error("no stations available")]
    NoStationsAvailable,
}
