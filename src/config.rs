//! Configuration System
//!
//! Layered configuration for user interfaces: built-in defaults, the global
//! config file, an explicit config file, then `COMMANDER_UI__*` environment
//! variables. The `[host]` section is opaque and kept for the host framework.

use crate::error::ConfigError;
use crate::format::{Color, StatusConsoleFormatter};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

mod merge_policy;
mod sources;

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Console rendering settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Host-defined settings, stored but not interpreted
    #[serde(default)]
    pub host: HashMap<String, serde_json::Value>,
}

/// Console rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Emit ANSI colors (default: true)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Text printed before every error message
    #[serde(default = "default_error_prefix")]
    pub error_prefix: String,

    /// Color for statuses without an explicit entry
    #[serde(default = "default_fallback_color")]
    pub fallback_color: Color,

    /// Extra status to color entries, keyed by status code
    #[serde(default)]
    pub status_colors: BTreeMap<String, Color>,
}

fn default_true() -> bool {
    true
}

fn default_error_prefix() -> String {
    "ERROR: ".to_string()
}

fn default_fallback_color() -> Color {
    Color::FAILURE
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            error_prefix: default_error_prefix(),
            fallback_color: default_fallback_color(),
            status_colors: BTreeMap::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_prefix.contains('\n') {
            return Err(ConfigError::InvalidConsole(
                "error_prefix cannot contain a newline".to_string(),
            ));
        }
        StatusConsoleFormatter::from_config(self).map(|_| ())
    }
}

impl UiConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.console.validate()?;
        self.logging.validate()
    }
}

/// Loads `UiConfig` from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load with full precedence: defaults, global file, `explicit` file (required when given), environment.
    pub fn load(explicit: Option<&Path>) -> Result<UiConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load defaults plus a single file, ignoring the global file and environment.
    pub fn load_from_file(path: &Path) -> Result<UiConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<UiConfig, ConfigError> {
        let config: UiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
