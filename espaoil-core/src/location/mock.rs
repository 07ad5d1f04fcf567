//! Scripted position provider for testing the search flow without a
//! real position feed.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::LocationError;
use super::provider::{LocationProvider, Position, PositionRequest};

/// What a scripted attempt should do.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Resolve with this position.
    Resolve(Position),
    /// Fail with this error.
    Fail(LocationError),
    /// Never resolve; the caller's timeout has to fire.
    Hang,
}

/// Provider that replays a queue of scripted outcomes, one per attempt,
/// and records the request each attempt was made with.
pub struct MockLocationProvider {
    supported: bool,
    secure: bool,
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<PositionRequest>>,
}

impl MockLocationProvider {
    pub fn new() -> Self {
        Self {
            supported: true,
            secure: true,
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider that reports no geolocation capability.
    pub fn unsupported() -> Self {
        let mut provider = Self::new();
        provider.supported = false;
        provider
    }

    /// A provider running in an insecure execution context.
    pub fn insecure() -> Self {
        let mut provider = Self::new();
        provider.secure = false;
        provider
    }

    /// Queue the outcome for the next unscripted attempt.
    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    /// The requests seen so far, in attempt order.
    pub fn requests(&self) -> Vec<PositionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for MockLocationProvider {
    fn supported(&self) -> bool {
        self.supported
    }

    fn secure_context(&self) -> bool {
        self.secure
    }

    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<Position, LocationError> {
        self.requests.lock().unwrap().push(*request);

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Resolve(position)) => Ok(position),
            Some(MockOutcome::Fail(error)) => Err(error),
            Some(MockOutcome::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(LocationError::Other("no scripted outcome".to_string())),
        }
    }
}
