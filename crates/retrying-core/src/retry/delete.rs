//! Retried deletes: "not found" after an earlier attempt means the earlier attempt won.

use super::classify::Classify;
use super::policy::RetryConfig;
use super::run::call_with_retries;

/// Wraps a delete so that a "not found" on any attempt but the first is success.
///
/// A previous attempt may have removed the target and then failed to report
/// it (e.g. the response was lost). A "not found" on the very first attempt
/// is still returned, since the target may never have existed.
#[derive(Debug)]
pub struct IdempotentDelete<F> {
    delete: F,
    is_retried: bool,
}

impl<F, E> IdempotentDelete<F>
where
    F: FnMut() -> Result<(), E>,
    E: Classify,
{
    pub fn new(delete: F) -> Self {
        Self {
            delete,
            is_retried: false,
        }
    }

    pub fn call(&mut self) -> Result<(), E> {
        let result = (self.delete)();
        if self.is_retried {
            if let Err(e) = &result {
                if e.is_not_found() {
                    tracing::debug!("retried delete found nothing to delete, treating as done: {}", e);
                    return Ok(());
                }
            }
        }
        self.is_retried = true;
        result
    }
}

/// Runs `delete` through [`call_with_retries`] with idempotent "not found" handling.
pub fn delete_with_retries<E, F>(delete: F, config: &RetryConfig) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
    E: Classify,
{
    let mut delete = IdempotentDelete::new(delete);
    call_with_retries(move || delete.call(), config)
}
