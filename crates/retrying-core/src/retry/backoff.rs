//! Exponential backoff with additive jitter.
//!
//! `delay = min(init << retries, max) + jitter`, where the jitter is drawn
//! uniformly from `[0, JITTER_RANGE_US)`. A zero base delay turns the whole
//! computation off and every delay is zero.

use rand::Rng;

use super::policy::RetryConfig;

/// Jitter is drawn from `[0, JITTER_RANGE_US)` microseconds (one second).
pub const JITTER_RANGE_US: u64 = 1_000_000;

/// Source of random jitter, in microseconds.
pub trait Jitter {
    fn jitter_us(&mut self) -> u64;
}

/// Thread-local RNG; independent threads draw decorrelated sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl Jitter for ThreadRngJitter {
    fn jitter_us(&mut self) -> u64 {
        rand::thread_rng().gen_range(0..JITTER_RANGE_US)
    }
}

/// Always zero; makes delays deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn jitter_us(&mut self) -> u64 {
        0
    }
}

impl<F> Jitter for F
where
    F: FnMut() -> u64,
{
    fn jitter_us(&mut self) -> u64 {
        self()
    }
}

/// Delay evaluator for a fixed config.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    config: RetryConfig,
}

impl Backoff {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// The capped exponential term for `retries` retries already performed.
    ///
    /// A shift that would push bits off the top counts as exceeding the cap.
    pub fn exponential_us(&self, retries: u32) -> u64 {
        saturating_shl(self.config.init_delay_time_us, retries).min(self.config.max_delay_time_us)
    }

    /// Delay before the next attempt, using the thread-local RNG for jitter.
    pub fn delay_us(&self, retries: u32) -> u64 {
        self.delay_us_with(retries, &mut ThreadRngJitter)
    }

    /// Delay before the next attempt with an explicit jitter source.
    ///
    /// Jitter values outside the range are clamped into it. No jitter is
    /// drawn when the base delay is zero.
    pub fn delay_us_with<J: Jitter + ?Sized>(&self, retries: u32, jitter: &mut J) -> u64 {
        if self.config.init_delay_time_us == 0 {
            return 0;
        }
        let jitter = jitter.jitter_us().min(JITTER_RANGE_US - 1);
        self.exponential_us(retries).saturating_add(jitter)
    }

    /// Delays for every retry the config allows, in order.
    pub fn schedule<J: Jitter>(&self, jitter: J) -> Schedule<J> {
        Schedule {
            backoff: *self,
            jitter,
            retries: 0,
        }
    }
}

/// Iterator over the delay before each retry. See [`Backoff::schedule`].
#[derive(Debug)]
pub struct Schedule<J> {
    backoff: Backoff,
    jitter: J,
    retries: u32,
}

impl<J: Jitter> Iterator for Schedule<J> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.retries >= self.backoff.config.max_retries {
            return None;
        }
        let d = self.backoff.delay_us_with(self.retries, &mut self.jitter);
        self.retries += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.backoff.config.max_retries - self.retries) as usize;
        (left, Some(left))
    }
}

impl<J: Jitter> ExactSizeIterator for Schedule<J> {}

fn saturating_shl(value: u64, shift: u32) -> u64 {
    if value == 0 {
        return 0;
    }
    if shift >= u64::BITS || value.leading_zeros() < shift {
        return u64::MAX;
    }
    value << shift
}
