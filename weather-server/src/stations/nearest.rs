//! Nearest-station resolution.

use std::cmp::Ordering;

use crate::domain::Coordinate;

use super::directory::Directory;
use super::error::StationError;

/// Name of the station closest to `coordinate`.
///
/// Distance is squared planar distance on raw degrees. Ties go to the
/// lexicographically smallest name, so the answer is the same on every run
/// regardless of map iteration order.
pub fn nearest(coordinate: Coordinate, directory: &Directory) -> Result<&str, StationError> {
    directory
        .iter()
        .map(|entry| (coordinate.squared_distance(&entry.coordinate), entry.name.as_str()))
        .min_by(|(da, na), (db, nb)| compare(*da, na, *db, nb))
        .map(|(_, name)| name)
        .ok_or(StationError::NoStationsAvailable)
}

/// Total order over (distance, name).
fn compare(da: f64, na: &str, db: f64, nb: &str) -> Ordering {
    da.total_cmp(&db).then_with(|| na.cmp(nb))
}
