//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::{Ephemeris, SiderustEphemeris};

/// Shared application state passed to all handlers.
///
/// Holds nothing mutable: each request computes its answer from scratch.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris used by both calculators
    pub ephemeris: Arc<dyn Ephemeris>,
}

impl AppState {
    /// Create a new application state with the given ephemeris.
    pub fn new(ephemeris: Arc<dyn Ephemeris>) -> Self {
        Self { ephemeris }
    }

    /// State backed by the siderust ephemeris.
    pub fn siderust() -> Self {
        Self::new(Arc::new(SiderustEphemeris::new()))
    }
}
