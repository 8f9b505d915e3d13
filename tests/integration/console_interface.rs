//! Integration tests for the console user interface

use super::test_utils::buffered_ui;
use commander_ui::console::{PromptKind, Stream};
use commander_ui::{
    Color, Command, Commander, Payload, ReportEvent, ReportFormatter, StyledLine, UiError,
    UserInterface,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Serialize)]
struct Target {
    name: String,
}

#[test]
fn test_failed_build_scenario() {
    let mut ui = buffered_ui(&[]);
    let event = ReportEvent::from_serialize(
        &json!({"name": "build"}),
        1,
        Some(&json!({"reason": "timeout"})),
    )
    .unwrap();
    ui.report(event).unwrap();

    assert_eq!(ui.report_log().len(), 1);
    assert_eq!(
        serde_json::to_value(&ui.report_log()[0]).unwrap(),
        json!({"object": {"name": "build"}, "status": 1, "data": {"reason": "timeout"}})
    );
    let writes = ui.console().writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].text, "{'name': 'build'}\n");
    assert_eq!(writes[0].color, Some(Color::Red));
}

#[test]
fn test_report_log_keeps_call_order_and_duplicates() {
    let mut ui = buffered_ui(&[]);
    let statuses = [0, 2, 0, 0, -1];
    for (i, status) in statuses.iter().enumerate() {
        let target = Target {
            name: format!("t{}", i % 2),
        };
        let event = ReportEvent::from_serialize(&target, *status, None::<&Target>).unwrap();
        ui.report(event).unwrap();
    }

    let log = ui.report_log();
    assert_eq!(log.len(), statuses.len());
    for (i, (event, status)) in log.iter().zip(statuses).enumerate() {
        assert_eq!(event.status, status);
        assert_eq!(event.object.get("name"), Some(&json!(format!("t{}", i % 2))));
        assert!(event.data.is_none());
    }
}

#[test]
fn test_report_object_matches_explicit_defaults() {
    let mut short = buffered_ui(&[]);
    let mut explicit = buffered_ui(&[]);
    let object = Payload::new().with("name", "build");

    short.report_object(object.clone()).unwrap();
    explicit
        .report(ReportEvent {
            object,
            status: 0,
            data: None,
        })
        .unwrap();

    assert_eq!(short.report_log(), explicit.report_log());
    assert_eq!(short.console().writes(), explicit.console().writes());
}

#[test]
fn test_malformed_payload_fails_before_reaching_interface() {
    let result = ReportEvent::from_serialize(&vec!["build"], 0, None::<&()>);
    assert!(matches!(result, Err(UiError::MalformedPayload(_))));
}

struct Verbose;

impl ReportFormatter for Verbose {
    fn format(&self, event: &ReportEvent) -> Vec<StyledLine> {
        let mut lines = vec![StyledLine::new(
            format!("[{}] {}\n", event.status, event.object),
            Color::White,
        )];
        if let Some(data) = &event.data {
            for (key, value) in data.as_map() {
                lines.push(StyledLine::new(format!("    {} = {}\n", key, value), Color::Cyan));
            }
        }
        lines
    }
}

#[test]
fn test_custom_formatter_renders_data_lines() {
    let mut ui = buffered_ui(&[]);
    ui.report_object(Payload::new().with("name", "before")).unwrap();
    ui.set_formatter(Arc::new(Verbose));
    ui.report(
        ReportEvent::new(Payload::new().with("name", "after"))
            .with_status(4)
            .with_data(Payload::new().with("a", 1).with("b", "x")),
    )
    .unwrap();

    assert_eq!(
        ui.console().text(Stream::Output),
        "{'name': 'before'}\n[4] {'name': 'after'}\n    a = 1\n    b = \"x\"\n"
    );
}

struct Login;

impl Command for Login {
    fn name(&self) -> &str {
        "login"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<(), UiError> {
        let user = ui.ask(Some("User: "), false)?;
        let secret = ui.ask(Some("Password: "), true)?;
        if secret.is_empty() {
            ui.error("empty password")?;
            return Err(UiError::CommandFailed {
                command: self.name().to_string(),
                message: "empty password".to_string(),
            });
        }
        ui.report_object(Payload::new().with("user", user))
    }
}

#[test]
fn test_command_prompts_through_commander() {
    let mut commander = Commander::with_interface(buffered_ui(&["ada", "correct horse"]));
    commander.run(&Login).unwrap();

    let ui = commander.interface();
    let output = ui.console().text(Stream::Output);
    assert_eq!(output, "User: ada\nPassword: \n{'user': 'ada'}\n");
    assert!(!output.contains("correct horse"));
    assert_eq!(ui.console().prompts()[1].0, PromptKind::Hidden);
}

#[test]
fn test_command_error_reaches_error_stream_and_caller() {
    let mut commander = Commander::with_interface(buffered_ui(&["ada", ""]));
    let err = commander.run(&Login).unwrap_err();
    assert!(matches!(err, UiError::CommandFailed { .. }));

    let ui = commander.interface();
    assert_eq!(ui.console().text(Stream::Error), "ERROR: empty password\n");
    assert!(ui.report_log().is_empty());
}
