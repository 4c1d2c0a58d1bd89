//! Taiwan Central Weather Administration (CWA) open-data client.
//!
//! Talks to the automatic-station datastores, which share one JSON shape:
//! `records.Station[]`, each with `GeoInfo`, `ObsTime` and `WeatherElement`.
//!
//! Notes on the upstream data:
//! - The API key goes in the `Authorization` *query parameter*, not a header
//! - `GeoInfo.Coordinates` holds one entry per datum; entry 1 is used
//! - Timestamps carry a literal `+08:00` suffix, which is stripped as text
//! - Relative humidity is a whole-number percentage

mod client;
mod convert;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{AUTOMATIC_STATIONS_URL, CwaClient, CwaConfig, PRINCIPAL_STATIONS_URL};
pub use convert::{
    ConversionError, convert_observation, convert_station_entry, convert_station_list,
    decode_station,
};
pub use error::CwaError;
pub use types::{
    CoordinateRecord, DatastoreResponse, GeoInfo, Now, ObsTime, Records, StationRecord,
    WeatherElement,
};
