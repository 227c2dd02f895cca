//! CLI command handlers, one file per command.

mod analyze;
mod completions;
mod config;
mod health;

pub use analyze::run_analyze;
pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use health::run_health;
