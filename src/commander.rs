//! Command host: owns the run's single user interface and lends it to each command.

use tracing::{debug, info, warn};

use crate::config::UiConfig;
use crate::console::Terminal;
use crate::error::UiError;
use crate::ui::{ConsoleUserInterface, UserInterface};

/// A unit of work executed by a `Commander`.
pub trait Command {
    fn name(&self) -> &str;

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<(), UiError>;
}

/// Runs commands against one user interface.
pub struct Commander<U: UserInterface = ConsoleUserInterface<Terminal>> {
    ui: U,
}

impl Commander<ConsoleUserInterface<Terminal>> {
    /// Commander on the process terminal, used when the host supplies no other surface.
    pub fn new(config: UiConfig) -> Result<Self, UiError> {
        Ok(Self::with_interface(ConsoleUserInterface::new(config)?))
    }
}

impl<U: UserInterface> Commander<U> {
    pub fn with_interface(ui: U) -> Self {
        Self { ui }
    }

    pub fn interface(&self) -> &U {
        &self.ui
    }

    pub fn interface_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn into_interface(self) -> U {
        self.ui
    }

    /// Execute `command`. Failures are returned to the caller as-is.
    pub fn run(&mut self, command: &dyn Command) -> Result<(), UiError> {
        info!(command = command.name(), "command started");
        match command.execute(&mut self.ui) {
            Ok(()) => {
                debug!(command = command.name(), "command finished");
                Ok(())
            }
            Err(err) => {
                warn!(command = command.name(), error = %err, "command failed");
                Err(err)
            }
        }
    }
}
