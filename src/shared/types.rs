//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Processor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Emit per-cycle diagnostics
    #[serde(default)]
    pub verbose: bool,
    /// Per-cycle timeout in milliseconds. Reserved: not enforced yet.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Max retries for a failed cycle (accepted, no retry loop wired up)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}
