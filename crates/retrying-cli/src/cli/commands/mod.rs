//! CLI command handlers. Each command is in its own file.

mod config;
mod delays;
mod delete;
mod run;

pub use config::run_config;
pub use delays::run_delays;
pub use delete::run_delete;
pub use run::run_command;
