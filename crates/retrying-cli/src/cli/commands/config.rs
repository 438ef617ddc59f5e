//! `retrying config` – show where the config lives and what it resolves to.

use anyhow::Result;
use retrying_core::retry::RetryConfig;
use std::path::Path;

pub fn run_config(path: &Path, retry: &RetryConfig) -> Result<()> {
    println!("config file: {}", path.display());
    println!("max_retries = {}", retry.max_retries);
    println!("init_delay_time_us = {}", retry.init_delay_time_us);
    println!("max_delay_time_us = {}", retry.max_delay_time_us);
    if let Err(e) = retry.validate() {
        println!("warning: {e}");
    }
    Ok(())
}
