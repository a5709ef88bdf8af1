//! Shared state for API handlers.

use crate::config::Config;

/// State shared by every API handler.
///
/// The scorer itself is stateless; the only thing handlers need is the
/// loaded configuration for request-layer guards.
pub struct ApiState {
    pub config: Config,
}

impl ApiState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
