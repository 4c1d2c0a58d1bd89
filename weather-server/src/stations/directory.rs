//! Station directory: name → (source endpoint, coordinate).

use std::collections::HashMap;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::cwa::{CwaClient, convert_station_list};
use crate::domain::{Coordinate, StationEntry};

use super::error::StationError;

/// An immutable snapshot of known stations, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    entries: HashMap<String, StationEntry>,
}

impl Directory {
    /// Build a directory from entries in order. Later entries replace
    /// earlier ones with the same name.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = StationEntry>,
    {
        let mut directory = Self::default();
        for entry in entries {
            directory.insert(entry);
        }
        directory
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: StationEntry) -> Option<StationEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Look up a station by exact name.
    pub fn get(&self, name: &str) -> Option<&StationEntry> {
        self.entries.get(name)
    }

    /// Endpoint that reports the named station.
    pub fn url_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.source_url.as_str())
    }

    /// Position of the named station.
    pub fn coordinate_for(&self, name: &str) -> Option<Coordinate> {
        self.get(name).map(|e| e.coordinate)
    }

    /// Name → endpoint view.
    pub fn urls(&self) -> HashMap<&str, &str> {
        self.iter()
            .map(|e| (e.name.as_str(), e.source_url.as_str()))
            .collect()
    }

    /// Name → coordinate view.
    pub fn coordinates(&self) -> HashMap<&str, Coordinate> {
        self.iter().map(|e| (e.name.as_str(), e.coordinate)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lazily-loaded station directory.
///
/// The first call to [`ensure_loaded`](Self::ensure_loaded) fetches every
/// configured datastore; concurrent first callers wait for that single
/// load. Once a non-empty directory is loaded it is never refetched. An
/// empty result is not kept, so the next call tries again.
#[derive(Debug)]
pub struct StationDirectory {
    client: CwaClient,
    loaded: OnceCell<Directory>,
}

impl StationDirectory {
    /// Create an unloaded directory backed by `client`.
    pub fn new(client: CwaClient) -> Self {
        Self {
            client,
            loaded: OnceCell::new(),
        }
    }

    /// Create a directory that starts out with `directory` already loaded.
    ///
    /// An empty `directory` leaves it unloaded.
    pub fn with_directory(client: CwaClient, directory: Directory) -> Self {
        let initial = (!directory.is_empty()).then_some(directory);
        Self {
            client,
            loaded: OnceCell::new_with(initial),
        }
    }

    /// Return the directory, loading it on first use.
    ///
    /// Fails with [`StationError::NoStationsAvailable`] if no datastore
    /// produced any station.
    pub async fn ensure_loaded(&self, api_key: &str) -> Result<&Directory, StationError> {
        self.loaded
            .get_or_try_init(|| async move {
                let directory = load(&self.client, api_key).await;
                if directory.is_empty() {
                    warn!("no station source produced any stations");
                    return Err(StationError::NoStationsAvailable);
                }
                info!(stations = directory.len(), "station directory loaded");
                Ok(directory)
            })
            .await
    }

    /// The directory, if it has been loaded.
    pub fn get(&self) -> Option<&Directory> {
        self.loaded.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Drop the loaded directory so the next query reloads it.
    pub fn reset(&mut self) -> Option<Directory> {
        self.loaded.take()
    }

    /// The client used for loading.
    pub fn client(&self) -> &CwaClient {
        &self.client
    }
}

/// Fetch and merge every configured station source.
///
/// Endpoints are walked last to first and later writes win, so on a name
/// collision the entry from the first configured endpoint is kept. A source
/// that fails or lists no stations is skipped.
pub async fn load(client: &CwaClient, api_key: &str) -> Directory {
    let mut directory = Directory::default();

    for url in client.endpoints().iter().rev() {
        let records = match client.fetch_stations(url, api_key).await {
            Ok(records) => records,
            Err(e) => {
                warn!(source = url.as_str(), error = %e, "skipping station source");
                continue;
            }
        };

        if records.is_empty() {
            warn!(source = url.as_str(), "station source listed no stations");
            continue;
        }

        let entries = convert_station_list(&records, url);
        debug!(source = url.as_str(), stations = entries.len(), "station source read");

        for entry in entries {
            directory.insert(entry);
        }
    }

    directory
}
