//! CLI domain: parse, built-in commands, and routing for the `commander` binary.

mod commands;
mod parse;
mod route;

pub use commands::{AskCommand, ErrorCommand, ReportCommand};
pub use parse::{Cli, Commands};
pub use route::{build_logging_config, run};
