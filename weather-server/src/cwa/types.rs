//! CWA open-data API response DTOs.
//!
//! These map the `records.Station` shape shared by the automatic-station
//! datastores (`O-A0001-001`, `O-A0003-001`). The station list is kept as
//! raw JSON and each entry is decoded on its own, so one odd record can't
//! fail the whole list. Within a record everything is optional: a missing
//! field becomes a conversion error later.

use serde::Deserialize;
use serde_json::Value;

/// Top-level datastore response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatastoreResponse {
    #[serde(default)]
    pub records: Records,
}

/// The `records` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Records {
    /// Undecoded station entries; see [`StationRecord`].
    #[serde(rename = "Station", default)]
    pub station: Vec<Value>,
}

/// One station with its latest observation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    pub station_name: Option<String>,

    pub obs_time: Option<ObsTime>,

    pub geo_info: Option<GeoInfo>,

    pub weather_element: Option<WeatherElement>,
}

/// Observation timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObsTime {
    /// ISO 8601 with offset, e.g. "2025-11-18T11:00:00+08:00".
    pub date_time: Option<String>,
}

/// Station location metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoInfo {
    /// Coordinates in several datums. Entry 1 (WGS84 in current payloads)
    /// is the one used.
    #[serde(default)]
    pub coordinates: Vec<CoordinateRecord>,
}

/// A single coordinate entry.
///
/// Latitude and longitude arrive as numbers in current payloads and as
/// strings in older ones, so they are kept as raw JSON values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoordinateRecord {
    pub station_latitude: Option<Value>,
    pub station_longitude: Option<Value>,
}

/// Measured weather elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherElement {
    pub air_temperature: Option<Value>,
    pub relative_humidity: Option<Value>,
    pub now: Option<Now>,
}

/// The "current" sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Now {
    pub precipitation: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cwa::fixtures;

    #[test]
    fn missing_records_defaults_to_empty() {
        let resp: DatastoreResponse = serde_json::from_str(r#"{"success":"true"}"#).unwrap();
        assert!(resp.records.station.is_empty());
    }

    #[test]
    fn decodes_nested_shape() {
        let s: StationRecord =
            serde_json::from_value(fixtures::station("苗栗", 24.564569, 120.824575)).unwrap();

        assert_eq!(s.station_name.as_deref(), Some("苗栗"));
        let geo = s.geo_info.as_ref().unwrap();
        assert_eq!(geo.coordinates.len(), 2);
        assert_eq!(geo.coordinates[1].station_latitude, Some(json!(24.564569)));
        assert!(s.weather_element.as_ref().unwrap().now.is_some());
    }

    #[test]
    fn broken_entry_does_not_fail_the_list() {
        let body = fixtures::response(&[
            fixtures::station("苗栗", 24.564569, 120.824575),
            json!({ "StationName": "壞站", "GeoInfo": { "Coordinates": null } }),
        ]);

        let resp: DatastoreResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.records.station.len(), 2);
    }
}
