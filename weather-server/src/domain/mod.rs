//! Domain types for the weather service.
//!
//! These are the validated, normalized shapes the rest of the crate works
//! with. Upstream JSON is converted into them in `cwa::convert`.

mod coordinate;
mod observation;
mod site;
mod station_entry;

pub use coordinate::{Coordinate, Decimal};
pub use observation::Observation;
pub use site::Site;
pub use station_entry::StationEntry;
