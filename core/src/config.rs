//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL every endpoint is appended to, e.g. `http://localhost:8000`.
    pub host: String,
    /// Whole-request timeout in milliseconds. `0` disables it.
    #[serde(default)]
    pub timeout: u64,
}

impl Config {
    pub fn new(host: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            host: host.into(),
            timeout: timeout_ms,
        }
    }

    pub(crate) fn timeout_duration(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_millis(self.timeout))
    }
}
