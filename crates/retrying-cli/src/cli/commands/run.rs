//! `retrying run -- <program> [args...]` – run a program until it exits 0 or retries run out.

use anyhow::{anyhow, Result};
use retrying_core::retry::{self, RetryConfig};
use retrying_core::status::Status;
use std::process::{Command, ExitStatus};

/// Runs `argv` through the retry driver.
///
/// A non-zero exit is unclassified (retriable); death by signal is treated as
/// cancellation and returned at once. Spawn errors are classified by their IO
/// kind, so a missing program fails without retrying.
pub fn run_command(argv: &[String], config: &RetryConfig) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("no program given"))?;

    let mut attempts = 0u32;
    let result = retry::call_with_retries(
        || {
            attempts += 1;
            tracing::info!(attempt = attempts, program = %program, "running command");
            run_once(program, args)
        },
        config,
    );

    match result {
        Ok(()) => {
            tracing::info!(attempts, program = %program, "command succeeded");
            Ok(())
        }
        Err(status) => Err(anyhow::Error::new(status).context(format!("`{program}` failed"))),
    }
}

fn run_once(program: &str, args: &[String]) -> Result<(), Status> {
    let status = Command::new(program).args(args).status()?;
    exit_status_to_result(status)
}

fn exit_status_to_result(status: ExitStatus) -> Result<(), Status> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(Status::unknown(format!("exited with status {code}"))),
        None => Err(Status::cancelled(format!("terminated by signal ({status})"))),
    }
}
