//! Station data acquisition and normalization.
//!
//! The repository fetches raw station records through a [`StationSource`]
//! and enriches them into [`StationDisplay`](crate::domain::StationDisplay)
//! values with normalized numerics and the distance from the query point.
//!
//! Two sources exist: [`HttpStationSource`] talks to the remote price
//! service, [`SyntheticStationSource`] fabricates plausible records for
//! local development. Which one a repository wraps is decided once, at
//! construction time, by configuration presence.

mod error;
mod http;
mod source;
mod synthetic;

pub use error::RepositoryError;
pub use http::{HttpSourceConfig, HttpStationSource};
pub use source::{StationQuery, StationRepository, StationSource};
pub use synthetic::SyntheticStationSource;
