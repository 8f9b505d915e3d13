//! Commander UI: pluggable user feedback surfaces for command execution.
//!
//! Commands receive a [`ui::UserInterface`] and call `ask`, `error` and
//! `report` on it without knowing which surface is listening. The console
//! implementation records every report and renders it through a swappable
//! [`format::ReportFormatter`].

pub mod cli;
pub mod commander;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod logging;
pub mod payload;
pub mod report;
pub mod ui;

pub use crate::commander::{Command, Commander};
pub use crate::config::{ConfigLoader, ConsoleConfig, UiConfig};
pub use crate::console::{BufferConsole, Console, Terminal};
pub use crate::error::{ConfigError, UiError};
pub use crate::format::{Color, ReportFormatter, StatusConsoleFormatter, StyledLine};
pub use crate::payload::Payload;
pub use crate::report::ReportEvent;
pub use crate::ui::{ConsoleUserInterface, UserInterface};
