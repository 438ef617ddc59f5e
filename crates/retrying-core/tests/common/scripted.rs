//! Scripted operations and recording sleeps for driving the retry loop in tests.
//!
//! A `Script` replays a fixed list of outcomes, one per call, and repeats the
//! last one once the list runs out. Calls and sleeps are counted through
//! shared cells so the test can inspect them after the driver has consumed
//! the closures.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use retrying_core::status::Status;

#[derive(Clone)]
pub struct Script {
    outcomes: Rc<Vec<Result<(), Status>>>,
    calls: Rc<Cell<usize>>,
}

impl Script {
    pub fn new(outcomes: Vec<Result<(), Status>>) -> Self {
        assert!(!outcomes.is_empty());
        Self {
            outcomes: Rc::new(outcomes),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Fails with the same status on every call.
    pub fn always(status: Status) -> Self {
        Self::new(vec![Err(status)])
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The closure handed to the driver.
    pub fn op(&self) -> impl FnMut() -> Result<(), Status> {
        let this = self.clone();
        move || {
            let n = this.calls.get();
            this.calls.set(n + 1);
            let idx = n.min(this.outcomes.len() - 1);
            this.outcomes[idx].clone()
        }
    }
}

#[derive(Clone, Default)]
pub struct SleepLog(Rc<RefCell<Vec<u64>>>);

impl SleepLog {
    pub fn delays(&self) -> Vec<u64> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    /// The sleep handed to the driver; records the delay and returns at once.
    pub fn sleeper(&self) -> impl FnMut(u64) {
        let log = self.0.clone();
        move |us| log.borrow_mut().push(us)
    }
}
