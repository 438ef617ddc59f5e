//! Retry and backoff policy.
//!
//! This module wraps an arbitrary fallible operation and re-invokes it on
//! transient failure, sleeping for an exponentially growing, jittered delay
//! between attempts until the retry budget is spent. Deletes get a variant
//! that treats "not found" on a retried attempt as success.

mod backoff;
mod classify;
mod delete;
mod error;
mod policy;
mod run;
mod sleep;

pub use backoff::{Backoff, Jitter, NoJitter, Schedule, ThreadRngJitter, JITTER_RANGE_US};
pub use classify::{is_retriable, Classify};
pub use delete::{delete_with_retries, IdempotentDelete};
pub use error::ConfigError;
pub use policy::RetryConfig;
pub use run::{call_with_retries, call_with_retries_and_sleep, execute};
pub use sleep::{Sleep, ThreadSleep};
