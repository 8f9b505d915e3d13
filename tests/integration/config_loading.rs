//! Integration tests for configuration loading

use commander_ui::{BufferConsole, Color, ConfigLoader, ConsoleUserInterface, UiError, UserInterface};
use commander_ui::console::Stream;
use commander_ui::{ConfigError, Payload, ReportEvent, ReportFormatter};
use tempfile::TempDir;

#[test]
fn test_file_config_drives_console_interface() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("ui.toml");
    std::fs::write(
        &config_file,
        r#"
[console]
error_prefix = "!! "
fallback_color = "magenta"

[console.status_colors]
0 = "blue"
2 = "yellow"

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");

    let mut ui = ConsoleUserInterface::with_console(config, BufferConsole::new()).unwrap();
    for status in [0, 2, 9] {
        ui.report(ReportEvent::new(Payload::new().with("s", status)).with_status(status))
            .unwrap();
    }
    ui.error("bad").unwrap();

    let colors: Vec<_> = ui.console().writes().iter().map(|w| w.color).collect();
    assert_eq!(
        colors,
        vec![
            Some(Color::Blue),
            Some(Color::Yellow),
            Some(Color::Magenta),
            Some(Color::Red)
        ]
    );
    assert_eq!(ui.console().text(Stream::Error), "!! bad\n");
}

#[test]
fn test_invalid_status_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("ui.toml");
    std::fs::write(
        &config_file,
        r#"
[console.status_colors]
warning = "yellow"
"#,
    )
    .unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStatusKey(_)));
}

#[test]
fn test_unknown_color_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("ui.toml");
    std::fs::write(&config_file, "[console]\nfallback_color = \"mauve\"\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_file(&config_file),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn test_invalid_logging_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("ui.toml");
    std::fs::write(&config_file, "[logging]\noutput = \"syslog\"\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_file(&config_file),
        Err(ConfigError::InvalidLogging(_))
    ));
}

#[test]
fn test_interface_construction_surfaces_config_errors() {
    let mut config = commander_ui::UiConfig::default();
    config.logging.format = "xml".to_string();
    let result = ConsoleUserInterface::with_console(config, BufferConsole::new());
    assert!(matches!(result, Err(UiError::Config(ConfigError::InvalidLogging(_)))));
}

#[test]
fn test_defaults_without_file_sections() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("ui.toml");
    std::fs::write(&config_file, "[host]\nname = \"ci\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.console.color);
    assert_eq!(config.console.error_prefix, "ERROR: ");
    assert_eq!(config.console.fallback_color, Color::Red);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.host.get("name"), Some(&serde_json::json!("ci")));

    let ui = ConsoleUserInterface::with_console(config, BufferConsole::new()).unwrap();
    assert_eq!(ui.formatter().format(&ReportEvent::new(Payload::new()))[0].color, Color::Green);
}
