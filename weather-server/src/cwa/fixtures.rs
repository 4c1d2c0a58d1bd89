//! Representative datastore payloads for tests.

use serde_json::{Value, json};

/// A station record with typical readings at the given WGS84 position.
pub fn station(name: &str, lat: f64, lon: f64) -> Value {
    station_with(name, lat, lon, json!(20.4), json!(71), json!(0.0))
}

/// A station record with explicit weather element values.
pub fn station_with(
    name: &str,
    lat: f64,
    lon: f64,
    temperature: Value,
    humidity: Value,
    precipitation: Value,
) -> Value {
    json!({
        "StationName": name,
        "StationId": "C0E750",
        "ObsTime": { "DateTime": "2025-11-18T11:00:00+08:00" },
        "GeoInfo": {
            "Coordinates": [
                {
                    "CoordinateName": "TWD67",
                    "CoordinateFormat": "decimal degrees",
                    "StationLatitude": lat - 0.0018,
                    "StationLongitude": lon - 0.0082
                },
                {
                    "CoordinateName": "WGS84",
                    "CoordinateFormat": "decimal degrees",
                    "StationLatitude": lat,
                    "StationLongitude": lon
                }
            ],
            "StationAltitude": "42.0",
            "CountyName": "苗栗縣",
            "TownName": "苗栗市"
        },
        "WeatherElement": {
            "Weather": "陰",
            "Now": { "Precipitation": precipitation },
            "WindDirection": 30.0,
            "WindSpeed": 2.1,
            "AirTemperature": temperature,
            "RelativeHumidity": humidity,
            "AirPressure": 1012.3
        }
    })
}

/// Wrap station records in the datastore envelope.
pub fn response(stations: &[Value]) -> Value {
    json!({
        "success": "true",
        "result": {
            "resource_id": "O-A0001-001",
            "fields": []
        },
        "records": {
            "Station": stations
        }
    })
}
