//! Classify failures for retry decisions.

use crate::status::{Code, Status};
use std::fmt;

/// What the retry driver needs to know about an error type.
///
/// Implement this for your own error type, or map failures into [`Status`]
/// which already implements it.
pub trait Classify: fmt::Display + Sized {
    /// True when the failure is plausibly transient and worth another attempt.
    fn is_retriable(&self) -> bool;

    /// True when the failure means the target does not exist.
    /// Only consulted by the delete wrapper.
    fn is_not_found(&self) -> bool {
        false
    }

    /// Build the terminal failure returned once the retry budget is spent.
    /// Must not itself be retriable, so an outer retry layer stops too.
    fn aborted(message: String) -> Self;
}

/// Unavailable, deadline exceeded and unknown failures are retried; everything else is not.
pub fn is_retriable(code: Code) -> bool {
    match code {
        Code::Unavailable | Code::DeadlineExceeded | Code::Unknown => true,
        // Ok also falls here.
        _ => false,
    }
}

impl Classify for Status {
    fn is_retriable(&self) -> bool {
        is_retriable(self.code())
    }

    fn is_not_found(&self) -> bool {
        self.code() == Code::NotFound
    }

    fn aborted(message: String) -> Self {
        Status::aborted(message)
    }
}
