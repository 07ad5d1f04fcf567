//! Geolocation capability.
//!
//! Position acquisition is modelled as a capability trait so the search
//! controller can run against a real position feed, fixed coordinates,
//! or a scripted mock. The two-tier accuracy/timeout fallback policy
//! lives in the controller; this module only defines the per-attempt
//! request shape and the error taxonomy.

mod error;
mod fixed;
mod mock;
mod provider;

pub use error::LocationError;
pub use fixed::FixedLocationProvider;
pub use mock::{MockLocationProvider, MockOutcome};
pub use provider::{HIGH_ACCURACY, LOW_ACCURACY, LocationProvider, Position, PositionRequest};
