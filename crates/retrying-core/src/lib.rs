pub mod config;
pub mod logging;
pub mod retry;
pub mod status;
