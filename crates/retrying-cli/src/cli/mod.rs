//! CLI for running commands and deletions with retries.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use retrying_core::config;
use retrying_core::retry::RetryConfig;
use std::path::PathBuf;

use commands::{run_command, run_config, run_delays, run_delete};

/// Top-level CLI for the retrying tool.
#[derive(Debug, Parser)]
#[command(name = "retrying")]
#[command(about = "Run commands and deletions with exponential backoff retries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the `[retry]` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct RetryArgs {
    /// Maximum number of retries after the first attempt.
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,
    /// Base backoff delay in microseconds (0 = retry immediately).
    #[arg(long, value_name = "MICROS")]
    pub init_delay_us: Option<u64>,
    /// Cap on the exponential part of the delay, in microseconds.
    #[arg(long, value_name = "MICROS")]
    pub max_delay_us: Option<u64>,
}

impl RetryArgs {
    /// `base` with every flag that was given applied on top.
    pub fn apply(&self, base: RetryConfig) -> RetryConfig {
        RetryConfig {
            init_delay_time_us: self.init_delay_us.unwrap_or(base.init_delay_time_us),
            max_delay_time_us: self.max_delay_us.unwrap_or(base.max_delay_time_us),
            max_retries: self.max_retries.unwrap_or(base.max_retries),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a program, retrying while it exits non-zero.
    Run {
        #[command(flatten)]
        retry: RetryArgs,

        /// Program and arguments (use `--` before them).
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Delete files, treating "not found" on a retry as already deleted.
    Delete {
        #[command(flatten)]
        retry: RetryArgs,

        /// Remove directories and their contents.
        #[arg(long, short)]
        recursive: bool,

        /// Paths to delete.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the delay before each retry for the effective config.
    Delays {
        #[command(flatten)]
        retry: RetryArgs,

        /// Leave out the random jitter so the output is reproducible.
        #[arg(long)]
        no_jitter: bool,
    },

    /// Show the config file path and the effective retry config.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let base = cfg.retry_config();

        match cli.command {
            CliCommand::Run { retry, command } => {
                run_command(&command, &effective(&retry, base)?)?;
            }
            CliCommand::Delete {
                retry,
                recursive,
                paths,
            } => run_delete(&paths, recursive, &effective(&retry, base)?)?,
            CliCommand::Delays { retry, no_jitter } => {
                run_delays(&effective(&retry, base)?, no_jitter);
            }
            CliCommand::Config => run_config(&config::config_path()?, &base)?,
        }

        Ok(())
    }
}

fn effective(args: &RetryArgs, base: RetryConfig) -> Result<RetryConfig> {
    let cfg = args.apply(base);
    cfg.validate().context("invalid retry flags")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests;
