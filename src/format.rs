//! Report formatting: status to color mapping and renderable lines.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConsoleConfig;
use crate::error::ConfigError;
use crate::report::ReportEvent;

/// Symbolic display color. Consoles decide how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const SUCCESS: Color = Color::Green;
    pub const FAILURE: Color = Color::Red;

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (text, color) pair to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub color: Color,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Strategy turning a report event into lines for a console.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, event: &ReportEvent) -> Vec<StyledLine>;
}

/// Default formatter: one line per report, colored by status.
///
/// Unknown statuses resolve to the fallback color. The default mapping is
/// `{0: green}` with fallback red.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusConsoleFormatter {
    status_colors: HashMap<i64, Color>,
    fallback: Color,
}

impl StatusConsoleFormatter {
    pub fn new() -> Self {
        let mut status_colors = HashMap::new();
        status_colors.insert(0, Color::SUCCESS);
        Self {
            status_colors,
            fallback: Color::FAILURE,
        }
    }

    /// Explicit mapping. No entry for status 0 is implied.
    pub fn with_colors(status_colors: HashMap<i64, Color>, fallback: Color) -> Self {
        Self {
            status_colors,
            fallback,
        }
    }

    /// Build from the `[console]` section: the default mapping overlaid with configured entries.
    pub fn from_config(console: &ConsoleConfig) -> Result<Self, ConfigError> {
        let mut formatter = Self::new();
        formatter.fallback = console.fallback_color;
        for (key, color) in &console.status_colors {
            let status = key
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidStatusKey(key.clone()))?;
            formatter.status_colors.insert(status, *color);
        }
        Ok(formatter)
    }

    pub fn set_color(&mut self, status: i64, color: Color) {
        self.status_colors.insert(status, color);
    }

    pub fn color_for(&self, status: i64) -> Color {
        self.status_colors
            .get(&status)
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> Color {
        self.fallback
    }
}

impl Default for StatusConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for StatusConsoleFormatter {
    fn format(&self, event: &ReportEvent) -> Vec<StyledLine> {
        vec![StyledLine::new(
            format!("{}\n", event.object),
            self.color_for(event.status),
        )]
    }
}
