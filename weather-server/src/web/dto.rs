//! Request types for the web layer.

use serde::Deserialize;

use crate::domain::Site;

/// Query string for `/cwa`.
///
/// Either `site` (a station name) or both `lat` and `lon`.
#[derive(Debug, Default, Deserialize)]
pub struct CwaRequest {
    pub site: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Why a `/cwa` query couldn't be turned into a [`Site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRequestError {
    /// Neither a name nor a full coordinate was given
    Missing,
    /// `lat` or `lon` isn't a number
    InvalidCoordinate(String),
}

impl CwaRequest {
    /// The site this request asks about. A non-empty `site` takes
    /// precedence over `lat`/`lon`.
    pub fn site(&self) -> Result<Site, SiteRequestError> {
        if let Some(name) = self.site.as_deref().filter(|s| !s.is_empty()) {
            return Ok(Site::name(name));
        }

        match (self.lat.as_deref(), self.lon.as_deref()) {
            (Some(lat), Some(lon)) => {
                let parse = |v: &str| {
                    v.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|n| n.is_finite())
                        .ok_or_else(|| SiteRequestError::InvalidCoordinate(v.to_string()))
                };
                Ok(Site::coordinate(parse(lat)?, parse(lon)?))
            }
            _ => Err(SiteRequestError::Missing),
        }
    }
}
