//! Commander CLI Binary
//!
//! Drives the console user interface from the command line.

use clap::Parser;
use commander_ui::cli::{run, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
