//! Retry loop: run a closure until success, a non-retriable failure, or the budget is spent.

use super::backoff::{Backoff, Jitter, ThreadRngJitter};
use super::classify::Classify;
use super::policy::RetryConfig;
use super::sleep::{Sleep, ThreadSleep};

/// Runs `operation` with retries, sleeping with `std::thread::sleep` between attempts.
///
/// Retriable failures (per [`Classify::is_retriable`]) are retried up to
/// `config.max_retries` times. Non-retriable failures are returned as-is.
/// Once the budget is spent an aborted failure is returned instead of the
/// last error, so an outer retry layer does not retry again.
pub fn call_with_retries<T, E, F>(operation: F, config: &RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Classify,
{
    call_with_retries_and_sleep(operation, ThreadSleep, config)
}

/// Same as [`call_with_retries`] with a caller-supplied sleep.
pub fn call_with_retries_and_sleep<T, E, F, S>(
    operation: F,
    sleep: S,
    config: &RetryConfig,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Classify,
    S: Sleep,
{
    execute(operation, E::is_retriable, sleep, ThreadRngJitter, config)
}

/// The retry state machine with every collaborator injected.
///
/// `sleep` is called exactly once per retry, with the delay computed for the
/// number of retries performed so far; never before the first attempt and
/// never after the final one.
pub fn execute<T, E, F, C, S, J>(
    mut operation: F,
    is_retriable: C,
    mut sleep: S,
    mut jitter: J,
    config: &RetryConfig,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    C: Fn(&E) -> bool,
    E: Classify,
    S: Sleep,
    J: Jitter,
{
    let backoff = Backoff::new(*config);
    let mut retries = 0u32;
    loop {
        let err = match operation() {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        if !is_retriable(&err) {
            return Err(err);
        }
        if retries >= config.max_retries {
            tracing::warn!(
                max_retries = config.max_retries,
                "all retry attempts failed: {}",
                err
            );
            return Err(E::aborted(format!(
                "All {} retry attempts failed. The last failure: {}",
                config.max_retries, err
            )));
        }
        let delay_us = backoff.delay_us_with(retries, &mut jitter);
        tracing::debug!(
            "the operation failed and will be automatically retried in {} seconds (attempt {} out of {}), caused by: {}",
            delay_us as f64 / 1_000_000.0,
            retries + 1,
            config.max_retries,
            err
        );
        sleep.sleep_us(delay_us);
        retries += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::NoJitter;
    use crate::status::{Code, Status};

    #[test]
    fn success_first_try_never_sleeps() {
        let mut calls = 0;
        let mut sleeps = 0;
        let r: Result<u32, Status> = call_with_retries_and_sleep(
            || {
                calls += 1;
                Ok(7)
            },
            |_: u64| sleeps += 1,
            &RetryConfig::new(1, 10, 5),
        );
        assert_eq!(r, Ok(7));
        assert_eq!(calls, 1);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn non_retriable_returned_unchanged() {
        let mut calls = 0;
        let mut sleeps = 0;
        let r: Result<(), Status> = call_with_retries_and_sleep(
            || {
                calls += 1;
                Err(Status::permission_denied("nope"))
            },
            |_: u64| sleeps += 1,
            &RetryConfig::new(1, 10, 5),
        );
        assert_eq!(r, Err(Status::permission_denied("nope")));
        assert_eq!(calls, 1);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn exhaustion_returns_aborted_with_last_message() {
        let mut calls = 0;
        let r: Result<(), Status> = call_with_retries_and_sleep(
            || {
                calls += 1;
                Err(Status::unavailable(format!("try {calls}")))
            },
            |_: u64| {},
            &RetryConfig::immediate(3),
        );
        let err = r.unwrap_err();
        assert_eq!(err.code(), Code::Aborted);
        assert_eq!(
            err.message(),
            "All 3 retry attempts failed. The last failure: UNAVAILABLE: try 4"
        );
        assert_eq!(calls, 4);
    }

    #[test]
    fn zero_budget_aborts_after_single_attempt() {
        let mut calls = 0;
        let mut sleeps = 0;
        let r: Result<(), Status> = call_with_retries_and_sleep(
            || {
                calls += 1;
                Err(Status::deadline_exceeded("slow"))
            },
            |_: u64| sleeps += 1,
            &RetryConfig::immediate(0),
        );
        assert_eq!(r.unwrap_err().code(), Code::Aborted);
        assert_eq!(calls, 1);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn execute_uses_injected_classifier_and_jitter() {
        let mut delays = Vec::new();
        let mut calls = 0;
        let r: Result<(), Status> = execute(
            || {
                calls += 1;
                Err(Status::not_found("missing"))
            },
            |e: &Status| e.code() == Code::NotFound,
            |us: u64| delays.push(us),
            NoJitter,
            &RetryConfig::new(100, 250, 3),
        );
        assert_eq!(r.unwrap_err().code(), Code::Aborted);
        assert_eq!(calls, 4);
        assert_eq!(delays, vec![100, 200, 250]);
    }
}
