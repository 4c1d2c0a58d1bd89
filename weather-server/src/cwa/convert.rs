//! Conversion from CWA DTOs to domain types.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{Coordinate, Observation, StationEntry};

use super::types::StationRecord;

/// Offset suffix removed from observation timestamps.
const LOCAL_OFFSET_SUFFIX: &str = "+08:00";

/// Position of the coordinate entry used in `GeoInfo.Coordinates`.
const COORDINATE_INDEX: usize = 1;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Field present but not a number
    #[error("invalid number in {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// Station entry doesn't fit the record shape at all
    #[error("unexpected record shape: {0}")]
    Shape(String),
}

/// Convert a station list into directory entries tagged with `source_url`.
///
/// Records that can't be decoded or converted are logged and skipped.
pub fn convert_station_list(records: &[Value], source_url: &str) -> Vec<StationEntry> {
    let mut entries = Vec::with_capacity(records.len());

    for value in records {
        let converted =
            decode_station(value).and_then(|record| convert_station_entry(&record, source_url));

        match converted {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(
                    station = value
                        .get("StationName")
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or("<unnamed>"),
                    source = source_url,
                    error = %e,
                    "skipping station"
                );
            }
        }
    }

    entries
}

/// Decode one raw `records.Station` entry.
pub fn decode_station(value: &Value) -> Result<StationRecord, ConversionError> {
    StationRecord::deserialize(value).map_err(|e| ConversionError::Shape(e.to_string()))
}

/// Convert a single station record into a directory entry.
pub fn convert_station_entry(
    record: &StationRecord,
    source_url: &str,
) -> Result<StationEntry, ConversionError> {
    let name = record
        .station_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or(ConversionError::MissingField("StationName"))?;

    Ok(StationEntry {
        name: name.to_string(),
        source_url: source_url.to_string(),
        coordinate: station_coordinate(record)?,
    })
}

/// Convert the first record of an observation query.
///
/// `station` is the name that was asked for; it is carried through as-is.
pub fn convert_observation(
    record: &StationRecord,
    station: &str,
) -> Result<Observation, ConversionError> {
    let coordinate = station_coordinate(record)?;

    let observed_at = record
        .obs_time
        .as_ref()
        .and_then(|t| t.date_time.as_deref())
        .ok_or(ConversionError::MissingField("ObsTime.DateTime"))?
        .replace(LOCAL_OFFSET_SUFFIX, "");

    let element = record
        .weather_element
        .as_ref()
        .ok_or(ConversionError::MissingField("WeatherElement"))?;

    let temperature_c = number(
        element.air_temperature.as_ref(),
        "WeatherElement.AirTemperature",
    )?;
    let relative_humidity = number(
        element.relative_humidity.as_ref(),
        "WeatherElement.RelativeHumidity",
    )? / 100.0;
    let precipitation_mm = number(
        element.now.as_ref().and_then(|n| n.precipitation.as_ref()),
        "WeatherElement.Now.Precipitation",
    )?;

    Ok(Observation {
        station: station.to_string(),
        coordinate,
        observed_at,
        temperature_c,
        relative_humidity,
        precipitation_mm,
    })
}

/// Read the station's position from its second coordinate entry.
fn station_coordinate(record: &StationRecord) -> Result<Coordinate, ConversionError> {
    let entry = record
        .geo_info
        .as_ref()
        .and_then(|g| g.coordinates.get(COORDINATE_INDEX))
        .ok_or(ConversionError::MissingField("GeoInfo.Coordinates[1]"))?;

    let latitude = number(
        entry.station_latitude.as_ref(),
        "GeoInfo.Coordinates[1].StationLatitude",
    )?;
    let longitude = number(
        entry.station_longitude.as_ref(),
        "GeoInfo.Coordinates[1].StationLongitude",
    )?;

    Ok(Coordinate::new(latitude, longitude))
}

/// Accept a JSON number or a numeric string.
fn number(value: Option<&Value>, field: &'static str) -> Result<f64, ConversionError> {
    let value = match value {
        None | Some(Value::Null) => return Err(ConversionError::MissingField(field)),
        Some(v) => v,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| ConversionError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
