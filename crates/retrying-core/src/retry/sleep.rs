//! The blocking wait between attempts.

use std::time::Duration;

/// Something that can block the current thread for a number of microseconds.
///
/// Closures `FnMut(u64)` implement this, so tests can pass a recorder and
/// callers needing cancellation can pass a sleep that wakes early.
pub trait Sleep {
    fn sleep_us(&mut self, micros: u64);
}

/// Default sleep: `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep_us(&mut self, micros: u64) {
        if micros > 0 {
            std::thread::sleep(Duration::from_micros(micros));
        }
    }
}

impl<F> Sleep for F
where
    F: FnMut(u64),
{
    fn sleep_us(&mut self, micros: u64) {
        self(micros)
    }
}
