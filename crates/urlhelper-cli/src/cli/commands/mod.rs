//! CLI command handlers.

mod generate;
mod show_config;

pub use generate::{run_absolute, run_relative, run_scheme};
pub use show_config::run_show_config;
