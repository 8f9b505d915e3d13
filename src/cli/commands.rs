//! Built-in commands exposed by the binary.

use crate::commander::Command;
use crate::error::UiError;
use crate::payload::Payload;
use crate::report::ReportEvent;
use crate::ui::UserInterface;

/// Reports a single event.
#[derive(Debug, Clone)]
pub struct ReportCommand {
    pub event: ReportEvent,
}

impl ReportCommand {
    /// Parse the subject and optional data from JSON text. Both must be objects.
    pub fn from_json(object: &str, status: i64, data: Option<&str>) -> Result<Self, UiError> {
        let object = parse_payload(object)?;
        let data = data.map(parse_payload).transpose()?;
        let mut event = ReportEvent::new(object).with_status(status);
        event.data = data;
        Ok(Self { event })
    }
}

fn parse_payload(raw: &str) -> Result<Payload, UiError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Payload::try_from(value)
}

impl Command for ReportCommand {
    fn name(&self) -> &str {
        "report"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<(), UiError> {
        ui.report(self.event.clone())
    }
}

/// Prompts once and reports the outcome. Hidden answers are never reported.
#[derive(Debug, Clone, Default)]
pub struct AskCommand {
    pub message: Option<String>,
    pub password: bool,
}

impl Command for AskCommand {
    fn name(&self) -> &str {
        "ask"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<(), UiError> {
        let answer = ui.ask(self.message.as_deref(), self.password)?;
        let object = if self.password {
            Payload::new().with("received", answer.chars().count())
        } else {
            Payload::new().with("answer", answer)
        };
        ui.report_object(object)
    }
}

#[derive(Debug, Clone)]
pub struct ErrorCommand {
    pub message: String,
}

impl Command for ErrorCommand {
    fn name(&self) -> &str {
        "error"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<(), UiError> {
        ui.error(&self.message)
    }
}
