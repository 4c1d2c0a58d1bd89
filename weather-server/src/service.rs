//! Weather lookup facade.
//!
//! Ties together the station directory, nearest-station resolution and the
//! observation fetch behind one call.

use tracing::debug;

use crate::cwa::{CwaClient, CwaError};
use crate::domain::{Observation, Site};
use crate::stations::{Directory, StationDirectory, StationError, nearest};

/// Errors from [`WeatherService::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Cwa(#[from] CwaError),
}

/// Current-weather lookups by station name or coordinate.
#[derive(Debug)]
pub struct WeatherService {
    stations: StationDirectory,
}

impl WeatherService {
    /// Create a service whose directory loads on first lookup.
    pub fn new(client: CwaClient) -> Self {
        Self {
            stations: StationDirectory::new(client),
        }
    }

    /// Create a service with a directory that is already loaded.
    pub fn with_directory(client: CwaClient, directory: Directory) -> Self {
        Self {
            stations: StationDirectory::with_directory(client, directory),
        }
    }

    pub fn stations(&self) -> &StationDirectory {
        &self.stations
    }

    /// Mutable access, for [`StationDirectory::reset`].
    pub fn stations_mut(&mut self) -> &mut StationDirectory {
        &mut self.stations
    }

    /// Look up the latest observation for `site`.
    ///
    /// Returns `Ok(None)` for invalid input (empty name or key, non-finite
    /// coordinate), when no station directory could be loaded, for unknown
    /// station names, and when the datastore has nothing for the station.
    /// Connection failures and malformed records are errors.
    pub async fn lookup(
        &self,
        site: &Site,
        api_key: &str,
    ) -> Result<Option<Observation>, LookupError> {
        if api_key.is_empty() || !site.is_valid() {
            debug!(?site, "rejecting invalid lookup");
            return Ok(None);
        }

        let directory = match self.stations.ensure_loaded(api_key).await {
            Ok(directory) => directory,
            Err(StationError::NoStationsAvailable) => return Ok(None),
        };

        let name = match site {
            Site::Name(name) => name.as_str(),
            Site::Coordinate(c) => {
                let name = nearest(*c, directory)?;
                debug!(coordinate = %c, station = name, "resolved nearest station");
                name
            }
        };

        let Some(url) = directory.url_for(name) else {
            debug!(station = name, "unknown station");
            return Ok(None);
        };

        let observation = self
            .stations
            .client()
            .fetch_observation(url, name, api_key)
            .await?;

        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::cwa::{CwaConfig, fixtures};
    use crate::domain::{Coordinate, StationEntry};
    use crate::format::{NO_SUCH_STATION, format};

    fn client_for(server: &MockServer) -> CwaClient {
        let config = CwaConfig::new().with_endpoints([
            format!("{}/O-A0003-001", server.uri()),
            format!("{}/O-A0001-001", server.uri()),
        ]);
        CwaClient::new(config).unwrap()
    }

    /// Station lists on both routes, plus single-station answers for 苗栗.
    async fn taiwan(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/O-A0001-001"))
            .and(query_param("StationName", "苗栗"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response(&[
                fixtures::station("苗栗", 24.564569, 120.824575),
            ])))
            .with_priority(1)
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/O-A0001-001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response(&[
                fixtures::station("苗栗", 24.564569, 120.824575),
                fixtures::station("高雄", 22.565994, 120.315733),
            ])))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/O-A0003-001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response(&[
                fixtures::station("臺北", 25.037658, 121.514853),
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn lookup_by_name() {
        let server = MockServer::start().await;
        taiwan(&server).await;

        let service = WeatherService::new(client_for(&server));
        let obs = service.lookup(&Site::name("苗栗"), "k").await.unwrap().unwrap();

        assert_eq!(obs.station, "苗栗");
        assert_eq!(obs.temperature_c, 20.4);
        assert_eq!(
            format(Some(&obs), Some(", ")),
            "station: 苗栗, coordinate: (24.564569, 120.824575), time: 2025-11-18T11:00:00, \
             temperature: 20.4°C, humidity: 71%, precipitation: 0.0mm"
        );
    }

    #[tokio::test]
    async fn lookup_by_coordinate() {
        let server = MockServer::start().await;
        taiwan(&server).await;

        let service = WeatherService::new(client_for(&server));
        let obs = service
            .lookup(&Site::coordinate(24.6, 120.8), "k")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(obs.station, "苗栗");
    }

    #[tokio::test]
    async fn unknown_name_is_absent() {
        let server = MockServer::start().await;
        taiwan(&server).await;

        let service = WeatherService::new(client_for(&server));
        let result = service.lookup(&Site::name("月球"), "k").await.unwrap();

        assert!(result.is_none());
        assert_eq!(format(result.as_ref(), Some(", ")), NO_SUCH_STATION);
    }

    #[tokio::test]
    async fn invalid_input_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = WeatherService::new(client_for(&server));

        assert!(service.lookup(&Site::name(""), "k").await.unwrap().is_none());
        assert!(service.lookup(&Site::name("苗栗"), "").await.unwrap().is_none());
        assert!(
            service
                .lookup(&Site::coordinate(f64::NAN, 120.0), "k")
                .await
                .unwrap()
                .is_none()
        );
        assert!(!service.stations().is_loaded());
    }

    #[tokio::test]
    async fn no_stations_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let service = WeatherService::new(client_for(&server));

        assert!(service.lookup(&Site::name("苗栗"), "bad").await.unwrap().is_none());
        assert!(
            service
                .lookup(&Site::coordinate(24.5, 120.8), "bad")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn malformed_observation_is_an_error() {
        let server = MockServer::start().await;
        let mut broken = fixtures::station("苗栗", 24.564569, 120.824575);
        broken["ObsTime"] = serde_json::json!({});

        Mock::given(method("GET"))
            .and(path("/O-A0001-001"))
            .and(query_param("StationName", "苗栗"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::response(&[broken])),
            )
            .mount(&server)
            .await;

        let dir = Directory::from_entries([StationEntry {
            name: "苗栗".into(),
            source_url: format!("{}/O-A0001-001", server.uri()),
            coordinate: Coordinate::new(24.564569, 120.824575),
        }]);
        let service = WeatherService::with_directory(client_for(&server), dir);

        let err = service.lookup(&Site::name("苗栗"), "k").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::Cwa(CwaError::MalformedRecord { .. })
        ));
    }

    #[tokio::test]
    async fn directory_loaded_once_across_lookups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("StationName", "苗栗"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response(&[
                fixtures::station("苗栗", 24.564569, 120.824575),
            ])))
            .with_priority(1)
            .expect(3)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::response(&[
                fixtures::station("苗栗", 24.564569, 120.824575),
            ])))
            .expect(2)
            .mount(&server)
            .await;

        let service = WeatherService::new(client_for(&server));
        for _ in 0..3 {
            assert!(service.lookup(&Site::name("苗栗"), "k").await.unwrap().is_some());
        }
    }
}
