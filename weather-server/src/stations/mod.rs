//! Station directory and nearest-station lookup.
//!
//! Provides station name → (datastore URL, coordinate) mapping, fetched
//! from the CWA station lists on first use and kept for the life of the
//! directory.

mod directory;
mod error;
mod nearest;

pub use directory::{Directory, StationDirectory, load};
pub use error::StationError;
pub use nearest::nearest;
