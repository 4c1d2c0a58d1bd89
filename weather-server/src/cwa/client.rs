//! CWA open-data HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::Observation;

use serde_json::Value;

use super::convert::{convert_observation, decode_station};
use super::error::CwaError;
use super::types::DatastoreResponse;

/// Automatic weather stations (`O-A0001-001`).
pub const AUTOMATIC_STATIONS_URL: &str =
    "https://opendata.cwa.gov.tw/api/v1/rest/datastore/O-A0001-001";

/// Staffed and principal stations (`O-A0003-001`).
pub const PRINCIPAL_STATIONS_URL: &str =
    "https://opendata.cwa.gov.tw/api/v1/rest/datastore/O-A0003-001";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameter carrying the API key.
const AUTHORIZATION_PARAM: &str = "Authorization";

/// Query parameter selecting a single station.
const STATION_NAME_PARAM: &str = "StationName";

/// Configuration for the CWA client.
#[derive(Debug, Clone)]
pub struct CwaConfig {
    /// Station datastores, in priority order. The directory is built by
    /// walking this list backwards, so on a name collision the FIRST
    /// endpoint's entry is the one kept.
    pub endpoints: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CwaConfig {
    /// Create a config pointing at the production datastores.
    pub fn new() -> Self {
        Self {
            endpoints: vec![
                PRINCIPAL_STATIONS_URL.to_string(),
                AUTOMATIC_STATIONS_URL.to_string(),
            ],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Replace the endpoint list (for testing).
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for CwaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the CWA station datastores.
///
/// The API key is passed per call as the `Authorization` query parameter.
#[derive(Debug, Clone)]
pub struct CwaClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
}

impl CwaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CwaConfig) -> Result<Self, CwaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoints: config.endpoints,
        })
    }

    /// The configured datastore endpoints, in priority order.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Fetch every station listed by one datastore.
    ///
    /// Entries come back undecoded. A non-success status is returned as
    /// [`CwaError::Api`].
    pub async fn fetch_stations(&self, url: &str, api_key: &str) -> Result<Vec<Value>, CwaError> {
        let response = self.query(url, &[(AUTHORIZATION_PARAM, api_key)]).await?;
        Ok(response.records.station)
    }

    /// Fetch the latest observation for one station.
    ///
    /// Returns `Ok(None)` when the datastore answers with a non-success
    /// status or an empty station list. Connection failures and records of
    /// an unexpected shape are errors.
    pub async fn fetch_observation(
        &self,
        url: &str,
        station_name: &str,
        api_key: &str,
    ) -> Result<Option<Observation>, CwaError> {
        let params = [
            (AUTHORIZATION_PARAM, api_key),
            (STATION_NAME_PARAM, station_name),
        ];

        let response = match self.query(url, &params).await {
            Ok(response) => response,
            Err(CwaError::Api { status, message }) => {
                debug!(station = station_name, status, %message, "no observation");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let Some(record) = response.records.station.first() else {
            debug!(station = station_name, "empty station list");
            return Ok(None);
        };

        let record = decode_station(record)?;
        Ok(Some(convert_observation(&record, station_name)?))
    }

    async fn query(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<DatastoreResponse, CwaError> {
        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CwaError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CwaError::MalformedRecord {
            message: e.to_string(),
        })
    }
}
