//! `retrying delays` – print the backoff schedule.

use retrying_core::retry::{Backoff, NoJitter, RetryConfig, ThreadRngJitter};

/// Prints one line per retry with the delay that would precede it.
pub fn run_delays(config: &RetryConfig, no_jitter: bool) {
    for line in schedule_lines(config, no_jitter) {
        println!("{line}");
    }
}

fn schedule_lines(config: &RetryConfig, no_jitter: bool) -> Vec<String> {
    let backoff = Backoff::new(*config);
    let delays: Vec<u64> = if no_jitter {
        backoff.schedule(NoJitter).collect()
    } else {
        backoff.schedule(ThreadRngJitter).collect()
    };
    if delays.is_empty() {
        return vec!["no retries configured".to_string()];
    }
    delays
        .iter()
        .enumerate()
        .map(|(i, us)| format!("retry {:>3}: {:.6}s", i + 1, *us as f64 / 1_000_000.0))
        .collect()
}
