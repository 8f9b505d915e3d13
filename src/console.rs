//! Console capability: colored output streams and blocking line input.
//!
//! `ConsoleUserInterface` receives a `Console` at construction instead of
//! writing to the process streams directly, so tests and embedders can supply
//! their own device.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use dialoguer::console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::config::ConsoleConfig;
use crate::format::Color;

/// Text device used by console user interfaces.
pub trait Console {
    /// Write to the normal reporting stream.
    fn print(&mut self, text: &str, color: Color) -> io::Result<()>;

    /// Write to the error stream.
    fn print_error(&mut self, text: &str, color: Color) -> io::Result<()>;

    /// Show `prompt` and read one line with echo. The line terminator is stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Show `prompt` and read one line without echoing the typed characters.
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

impl From<Color> for AnsiColors {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => AnsiColors::Black,
            Color::Red => AnsiColors::Red,
            Color::Green => AnsiColors::Green,
            Color::Yellow => AnsiColors::Yellow,
            Color::Blue => AnsiColors::Blue,
            Color::Magenta => AnsiColors::Magenta,
            Color::Cyan => AnsiColors::Cyan,
            Color::White => AnsiColors::White,
        }
    }
}

/// The process terminal: stdout/stderr for output, the terminal for input.
///
/// When stdout is not a terminal (pipes, redirected files) input falls back to
/// plain stdin lines and colors are not emitted.
#[derive(Debug, Clone)]
pub struct Terminal {
    color_stdout: bool,
    color_stderr: bool,
    term: Term,
}

impl Terminal {
    /// `color` enables ANSI colors on the streams that are attached to a terminal.
    pub fn new(color: bool) -> Self {
        let term = Term::stdout();
        Self {
            color_stdout: color && term.is_term(),
            color_stderr: color && Term::stderr().is_term(),
            term,
        }
    }

    pub fn from_config(console: &ConsoleConfig) -> Self {
        Self::new(console.color)
    }

    fn prompt(&self, prompt: &str) -> io::Result<()> {
        if prompt.is_empty() {
            return Ok(());
        }
        self.term.write_str(prompt)?;
        self.term.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console for Terminal {
    fn print(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(paint(text, color, self.color_stdout).as_bytes())?;
        out.flush()
    }

    fn print_error(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(paint(text, color, self.color_stderr).as_bytes())?;
        err.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        if self.term.is_term() {
            self.term.read_line()
        } else {
            read_piped_line(io::stdin().lock())
        }
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        if self.term.is_term() {
            self.term.read_secure_line()
        } else {
            // Piped input is never echoed.
            read_piped_line(io::stdin().lock())
        }
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(AnsiColors::from(color)).to_string()
    } else {
        text.to_string()
    }
}

/// Read one line from a non-terminal source. A closed stream is `UnexpectedEof`.
fn read_piped_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(strip_line_terminator(line))
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Which logical stream a write went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Output,
    Error,
}

/// One recorded write. Prompts and echoed input have no color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub stream: Stream,
    pub text: String,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Visible,
    Hidden,
}

/// In-memory console with scripted input.
///
/// Visible reads echo the answer into the output record, as a terminal would.
/// Hidden reads never do.
#[derive(Debug, Default)]
pub struct BufferConsole {
    writes: Vec<Written>,
    input: VecDeque<String>,
    prompts: Vec<(PromptKind, String)>,
    broken: bool,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console that answers reads with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Console whose writes fail with `BrokenPipe`.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    pub fn writes(&self) -> &[Written] {
        &self.writes
    }

    pub fn prompts(&self) -> &[(PromptKind, String)] {
        &self.prompts
    }

    /// Concatenated text written to `stream`.
    pub fn text(&self, stream: Stream) -> String {
        self.writes
            .iter()
            .filter(|w| w.stream == stream)
            .map(|w| w.text.as_str())
            .collect()
    }

    fn record(&mut self, stream: Stream, text: &str, color: Option<Color>) -> io::Result<()> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        self.writes.push(Written {
            stream,
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn next_input(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}

impl Console for BufferConsole {
    fn print(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.record(Stream::Output, text, Some(color))
    }

    fn print_error(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.record(Stream::Error, text, Some(color))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push((PromptKind::Visible, prompt.to_string()));
        if !prompt.is_empty() {
            self.record(Stream::Output, prompt, None)?;
        }
        let line = self.next_input()?;
        self.record(Stream::Output, &format!("{}\n", line), None)?;
        Ok(line)
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push((PromptKind::Hidden, prompt.to_string()));
        if !prompt.is_empty() {
            self.record(Stream::Output, prompt, None)?;
        }
        let line = self.next_input()?;
        self.record(Stream::Output, "\n", None)?;
        Ok(line)
    }
}
