//! Domain types for the station search.
//!
//! The fuel type vocabulary and the raw station shape are external
//! contracts shared with the upstream price service; everything here
//! serializes to the exact wire names that service uses.

mod fuel;
mod sort;
mod station;

pub use fuel::{FuelType, InvalidFuelType};
pub use sort::{InvalidSortBy, SortBy};
pub use station::{NumberOrString, StationDisplay, StationRaw};
