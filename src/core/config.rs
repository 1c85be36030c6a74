//! Lookup configuration
//!
//! Carries the default poll budget a [`Finder`](crate::find::Finder)
//! applies when a call site doesn't supply its own. Embeds into a host
//! application's own serde config.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default budgets for safe lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Poll budget in seconds applied by a `Finder` when the caller gives
    /// none. 0 means a single attempt with no retrying.
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: env::var("SAFEFIND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl LookupConfig {
    /// Create a config with an explicit default budget in seconds
    pub fn with_timeout_secs(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    /// The default budget as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
