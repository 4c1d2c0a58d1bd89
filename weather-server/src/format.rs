//! Human-readable rendering of observations.
//!
//! Fields are emitted in a fixed order (station, coordinate, time,
//! temperature, humidity, precipitation) as `label: value` pairs joined by a
//! caller-chosen separator.

use serde_json::Value;

use crate::domain::{Coordinate, Decimal, Observation};

/// Returned when there is no observation to show.
pub const NO_SUCH_STATION: &str = "no such station";

/// Returned when the separator is missing or empty.
pub const BAD_SEPARATOR: &str = "bad separator";

/// Label set used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    /// Traditional Chinese labels (測站, 座標, ...).
    Chinese,
}

struct Labels {
    no_such_station: &'static str,
    station: &'static str,
    coordinate: &'static str,
    time: &'static str,
    temperature: &'static str,
    temperature_unit: &'static str,
    humidity: &'static str,
    precipitation: &'static str,
}

const ENGLISH: Labels = Labels {
    no_such_station: NO_SUCH_STATION,
    station: "station",
    coordinate: "coordinate",
    time: "time",
    temperature: "temperature",
    temperature_unit: "°C",
    humidity: "humidity",
    precipitation: "precipitation",
};

const CHINESE: Labels = Labels {
    no_such_station: "無此站",
    station: "測站",
    coordinate: "座標",
    time: "時間",
    temperature: "溫度",
    temperature_unit: "度",
    humidity: "濕度",
    precipitation: "雨量",
};

impl Language {
    fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Chinese => &CHINESE,
        }
    }
}

/// One renderable field. A record may have any subset of these.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field<'a> {
    Station(&'a str),
    Coordinate(Coordinate),
    Time(&'a str),
    Temperature(f64),
    Humidity(f64),
    Precipitation(f64),
}

impl Field<'_> {
    fn render(&self, labels: &Labels) -> String {
        match self {
            Field::Station(s) => format!("{}: {}", labels.station, s),
            Field::Coordinate(c) => format!("{}: {}", labels.coordinate, c),
            Field::Time(t) => format!("{}: {}", labels.time, t),
            Field::Temperature(t) => {
                format!(
                    "{}: {}{}",
                    labels.temperature,
                    Decimal(*t),
                    labels.temperature_unit
                )
            }
            Field::Humidity(h) => format!("{}: {:.0}%", labels.humidity, h * 100.0),
            Field::Precipitation(r) => format!("{}: {:.1}mm", labels.precipitation, r),
        }
    }
}

/// Renders observations with a fixed label set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    language: Language,
}

impl Formatter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The literal returned when there is nothing to show.
    pub fn no_such_station(&self) -> &'static str {
        self.language.labels().no_such_station
    }

    /// Render an observation, or the no-data literal if there is none.
    pub fn format(&self, observation: Option<&Observation>, separator: Option<&str>) -> String {
        let Some(obs) = observation else {
            return self.no_such_station().to_string();
        };

        let fields = [
            Field::Station(&obs.station),
            Field::Coordinate(obs.coordinate),
            Field::Time(&obs.observed_at),
            Field::Temperature(obs.temperature_c),
            Field::Humidity(obs.relative_humidity),
            Field::Precipitation(obs.precipitation_mm),
        ];
        self.join(&fields, separator)
    }

    /// Render a loosely-typed record in the compact `S/C/O/T/H/R` form.
    ///
    /// Fields that are absent or have the wrong JSON type are skipped.
    /// Anything other than a non-empty object is treated as no data.
    pub fn format_record(&self, record: &Value, separator: Option<&str>) -> String {
        let Some(map) = record.as_object().filter(|m| !m.is_empty()) else {
            return self.no_such_station().to_string();
        };

        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        let number = |key: &str| map.get(key).and_then(Value::as_f64);

        let coordinate = map.get("C").and_then(Value::as_array).and_then(|pair| {
            match pair.as_slice() {
                [lat, lon] => Some(Coordinate::new(lat.as_f64()?, lon.as_f64()?)),
                _ => None,
            }
        });

        let fields: Vec<Field<'_>> = [
            text("S").map(Field::Station),
            coordinate.map(Field::Coordinate),
            text("O").map(Field::Time),
            number("T").map(Field::Temperature),
            number("H").map(Field::Humidity),
            number("R").map(Field::Precipitation),
        ]
        .into_iter()
        .flatten()
        .collect();

        self.join(&fields, separator)
    }

    fn join(&self, fields: &[Field<'_>], separator: Option<&str>) -> String {
        let Some(sep) = separator.filter(|s| !s.is_empty()) else {
            return BAD_SEPARATOR.to_string();
        };

        let labels = self.language.labels();
        fields
            .iter()
            .map(|f| f.render(labels))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Render with English labels.
pub fn format(observation: Option<&Observation>, separator: Option<&str>) -> String {
    Formatter::default().format(observation, separator)
}

/// Render a compact record with English labels.
pub fn format_record(record: &Value, separator: Option<&str>) -> String {
    Formatter::default().format_record(record, separator)
}


#[cfg(test)]
mod proptests {
    use serde_json::{Map, json};

    use super::*;
    use proptest::prelude::*;

    /// (key, label, well-typed value, wrong-typed value)
    fn field_specs() -> Vec<(&'static str, &'static str, Value, Value)> {
        vec![
            ("S", "station", json!("苗栗"), json!(7)),
            ("C", "coordinate", json!([24.5, 120.8]), json!([24.5])),
            ("O", "time", json!("2025-11-18T11:00:00"), json!(false)),
            ("T", "temperature", json!(20.4), json!("20.4")),
            ("H", "humidity", json!(0.71), json!([0.71])),
            ("R", "precipitation", json!(0.5), json!(null)),
        ]
    }

    /// 0 = absent, 1 = well-typed, 2 = wrong type
    fn presence() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..3, 6)
    }

    proptest! {
        /// Emitted labels are exactly the well-typed fields, in fixed order
        #[test]
        fn labels_match_present_fields(states in presence()) {
            let specs = field_specs();
            let mut map = Map::new();
            let mut expected = Vec::new();

            for ((key, label, good, bad), state) in specs.into_iter().zip(&states) {
                match state {
                    1 => {
                        map.insert(key.to_string(), good);
                        expected.push(label);
                    }
                    2 => {
                        map.insert(key.to_string(), bad);
                    }
                    _ => {}
                }
            }
            // Keep the record non-empty so it isn't treated as no data
            map.insert("X".to_string(), json!("unused"));

            let out = format_record(&Value::Object(map), Some(" ; "));
            let labels: Vec<&str> = if out.is_empty() {
                Vec::new()
            } else {
                out.split(" ; ")
                    .map(|part| part.split(": ").next().unwrap_or(""))
                    .collect()
            };

            prop_assert_eq!(labels, expected);
        }

        /// Any non-empty separator appears exactly between fields
        #[test]
        fn separator_joins_all_fields(sep in "[|;/#]{1,3}") {
            let obs = Observation {
                station: "苗栗".to_string(),
                coordinate: Coordinate::new(24.5, 120.8),
                observed_at: "2025-11-18T11:00:00".to_string(),
                temperature_c: 20.4,
                relative_humidity: 0.71,
                precipitation_mm: 0.0,
            };
            let out = format(Some(&obs), Some(&sep));
            prop_assert_eq!(out.split(sep.as_str()).count(), 6);
        }
    }
}
