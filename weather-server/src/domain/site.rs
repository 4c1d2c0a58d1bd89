//! What a caller asks about: a station by name, or a point on the map.

use super::Coordinate;

/// A weather lookup target.
#[derive(Debug, Clone, PartialEq)]
pub enum Site {
    /// A station name exactly as the upstream service spells it (e.g. "臺北").
    Name(String),
    /// A location; resolved to the nearest known station.
    Coordinate(Coordinate),
}

impl Site {
    /// Shorthand for [`Site::Name`].
    pub fn name(name: impl Into<String>) -> Self {
        Site::Name(name.into())
    }

    /// Shorthand for [`Site::Coordinate`].
    pub fn coordinate(latitude: f64, longitude: f64) -> Self {
        Site::Coordinate(Coordinate::new(latitude, longitude))
    }

    /// Whether this site can be looked up at all.
    ///
    /// Empty names and non-finite coordinates are rejected.
    pub fn is_valid(&self) -> bool {
        match self {
            Site::Name(name) => !name.is_empty(),
            Site::Coordinate(c) => c.is_finite(),
        }
    }
}

impl From<Coordinate> for Site {
    fn from(c: Coordinate) -> Self {
        Site::Coordinate(c)
    }
}
