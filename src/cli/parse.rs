//! CLI parse: clap types for the commander binary. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Commander - report progress, errors and prompts through a console user interface
#[derive(Parser)]
#[command(name = "commander")]
#[command(about = "Drive a console user interface from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report one finished step
    Report {
        /// Subject of the step, as a JSON object
        object: String,
        /// Status code (0 is success)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        status: i64,
        /// Auxiliary data, as a JSON object
        #[arg(long)]
        data: Option<String>,
    },
    /// Prompt for one line of input
    Ask {
        /// Prompt text
        #[arg(long)]
        message: Option<String>,
        /// Hide the typed characters
        #[arg(long)]
        password: bool,
    },
    /// Print an error message
    Error {
        /// Message text
        message: String,
    },
}
