//! CLI route: load configuration, build the commander, dispatch one command.

use anyhow::Context;
use tracing::info;

use crate::cli::commands::{AskCommand, ErrorCommand, ReportCommand};
use crate::cli::parse::{Cli, Commands};
use crate::commander::{Command, Commander};
use crate::config::{ConfigLoader, UiConfig};
use crate::logging::{init_logging, LoggingConfig};

/// Run the parsed command line against the process terminal.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ConfigLoader::load(cli.config.as_deref()).context("loading configuration")?;

    let logging = build_logging_config(cli, &config);
    logging.validate().context("validating logging options")?;
    init_logging(Some(&logging)).context("initializing logging")?;
    info!("commander starting");

    let command = build_command(&cli.command)?;
    let mut commander = Commander::new(config).context("creating console user interface")?;
    commander
        .run(command.as_ref())
        .with_context(|| format!("command '{}' failed", command.name()))
}

/// Logging config from the config file with CLI flags applied on top.
pub fn build_logging_config(cli: &Cli, config: &UiConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    logging
}

fn build_command(command: &Commands) -> anyhow::Result<Box<dyn Command>> {
    let command: Box<dyn Command> = match command {
        Commands::Report {
            object,
            status,
            data,
        } => Box::new(
            ReportCommand::from_json(object, *status, data.as_deref())
                .context("parsing report payload")?,
        ),
        Commands::Ask { message, password } => Box::new(AskCommand {
            message: message.clone(),
            password: *password,
        }),
        Commands::Error { message } => Box::new(ErrorCommand {
            message: message.clone(),
        }),
    };
    Ok(command)
}
