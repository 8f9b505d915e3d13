//! User interfaces: the surface commands report to.
//!
//! A command framework creates exactly one `UserInterface` per run and hands it
//! to every command, so commands can prompt, report errors and report progress
//! without knowing whether a console, a GUI or a web client is listening.

use std::sync::Arc;

use tracing::debug;

use crate::config::UiConfig;
use crate::console::{Console, Terminal};
use crate::error::UiError;
use crate::format::{Color, ReportFormatter, StatusConsoleFormatter};
use crate::payload::Payload;
use crate::report::ReportEvent;

/// Feedback surface handed to every command.
pub trait UserInterface {
    /// The active formatter.
    fn formatter(&self) -> Arc<dyn ReportFormatter>;

    /// Replace the formatter for all subsequent reports.
    fn set_formatter(&mut self, formatter: Arc<dyn ReportFormatter>);

    /// Prompt for one line of input. `password` suppresses echo. The answer is returned untrimmed.
    fn ask(&mut self, message: Option<&str>, password: bool) -> Result<String, UiError>;

    /// Present an error message.
    fn error(&mut self, message: &str) -> Result<(), UiError>;

    /// Record and surface one finished unit of work.
    fn report(&mut self, event: ReportEvent) -> Result<(), UiError>;

    /// Report `object` with status 0 and no data.
    fn report_object(&mut self, object: Payload) -> Result<(), UiError> {
        self.report(ReportEvent::new(object))
    }
}

impl<T: UserInterface + ?Sized> UserInterface for Box<T> {
    fn formatter(&self) -> Arc<dyn ReportFormatter> {
        (**self).formatter()
    }

    fn set_formatter(&mut self, formatter: Arc<dyn ReportFormatter>) {
        (**self).set_formatter(formatter)
    }

    fn ask(&mut self, message: Option<&str>, password: bool) -> Result<String, UiError> {
        (**self).ask(message, password)
    }

    fn error(&mut self, message: &str) -> Result<(), UiError> {
        (**self).error(message)
    }

    fn report(&mut self, event: ReportEvent) -> Result<(), UiError> {
        (**self).report(event)
    }
}

/// Text console implementation. Keeps every reported event in memory.
pub struct ConsoleUserInterface<C: Console = Terminal> {
    config: UiConfig,
    console: C,
    formatter: Arc<dyn ReportFormatter>,
    report_log: Vec<ReportEvent>,
}

impl ConsoleUserInterface<Terminal> {
    /// Console interface on the process terminal.
    pub fn new(config: UiConfig) -> Result<Self, UiError> {
        let terminal = Terminal::from_config(&config.console);
        Self::with_console(config, terminal)
    }
}

impl<C: Console> ConsoleUserInterface<C> {
    /// Console interface on an injected console. The formatter is built from `config.console`.
    pub fn with_console(config: UiConfig, console: C) -> Result<Self, UiError> {
        config.validate()?;
        let formatter = StatusConsoleFormatter::from_config(&config.console)?;
        Ok(Self {
            config,
            console,
            formatter: Arc::new(formatter),
            report_log: Vec::new(),
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Every event reported so far, in call order.
    pub fn report_log(&self) -> &[ReportEvent] {
        &self.report_log
    }
}

impl<C: Console> UserInterface for ConsoleUserInterface<C> {
    fn formatter(&self) -> Arc<dyn ReportFormatter> {
        Arc::clone(&self.formatter)
    }

    fn set_formatter(&mut self, formatter: Arc<dyn ReportFormatter>) {
        debug!("formatter replaced");
        self.formatter = formatter;
    }

    fn ask(&mut self, message: Option<&str>, password: bool) -> Result<String, UiError> {
        let prompt = message.unwrap_or("");
        debug!(password, "prompting for input");
        let answer = if password {
            self.console.read_password(prompt)?
        } else {
            self.console.read_line(prompt)?
        };
        Ok(answer)
    }

    fn error(&mut self, message: &str) -> Result<(), UiError> {
        let mut text = format!("{}{}", self.config.console.error_prefix, message);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        self.console.print_error(&text, Color::FAILURE)?;
        Ok(())
    }

    fn report(&mut self, event: ReportEvent) -> Result<(), UiError> {
        self.report_log.push(event.clone());
        debug!(
            status = event.status,
            recorded = self.report_log.len(),
            "report recorded"
        );
        for line in self.formatter.format(&event) {
            self.console.print(&line.text, line.color)?;
        }
        Ok(())
    }
}
