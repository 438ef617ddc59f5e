//! Retry configuration validation errors.

/// A retry config that cannot be used as written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base delay is larger than the ceiling, so every delay would be capped.
    #[error("init_delay_time_us ({init_delay_time_us}) exceeds max_delay_time_us ({max_delay_time_us})")]
    InitDelayExceedsMax {
        init_delay_time_us: u64,
        max_delay_time_us: u64,
    },
}
