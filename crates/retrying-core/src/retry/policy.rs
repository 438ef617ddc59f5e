use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Retry budget and backoff parameters for one call site.
///
/// Cheap to copy; a single value can be shared by any number of independent
/// driver invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Base delay in microseconds for the first retry. `0` disables delays.
    pub init_delay_time_us: u64,
    /// Upper bound on the exponential part of the delay, in microseconds.
    pub max_delay_time_us: u64,
    /// Maximum number of retries (not counting the first attempt).
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            init_delay_time_us: 100 * 1000,
            max_delay_time_us: 32 * 1000 * 1000,
            max_retries: 10,
        }
    }
}

impl RetryConfig {
    pub fn new(init_delay_time_us: u64, max_delay_time_us: u64, max_retries: u32) -> Self {
        Self {
            init_delay_time_us,
            max_delay_time_us,
            max_retries,
        }
    }

    /// Retry without waiting between attempts (handy in tests).
    pub fn immediate(max_retries: u32) -> Self {
        Self::new(0, 0, max_retries)
    }

    /// Reject configs whose base delay is above the ceiling.
    ///
    /// The driver never calls this; such a config still works, the cap just
    /// applies from the first retry on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.init_delay_time_us > 0 && self.init_delay_time_us > self.max_delay_time_us {
            return Err(ConfigError::InitDelayExceedsMax {
                init_delay_time_us: self.init_delay_time_us,
                max_delay_time_us: self.max_delay_time_us,
            });
        }
        Ok(())
    }
}
