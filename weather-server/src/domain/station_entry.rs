//! Station directory entries.

use super::Coordinate;

/// A known reporting station and where its data comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct StationEntry {
    /// Unique station name (e.g. "苗栗").
    pub name: String,
    /// Datastore endpoint that reports this station.
    pub source_url: String,
    pub coordinate: Coordinate,
}
