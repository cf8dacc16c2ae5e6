//! Configuration types shared across the orchestrator and sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Dealflow` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealflowConfig {
    /// Timeout applied to each individual source call.
    pub source_timeout: Duration,
    /// Optional deadline for a whole fetch cycle (both record kinds together).
    pub request_timeout: Option<Duration>,
}

impl Default for DealflowConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}
