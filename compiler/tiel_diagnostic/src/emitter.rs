//! Terminal Emitter
//!
//! Renders a [`Diagnostic`] as
//!
//! ```text
//! TypeError at line 1, column 3: Operands to '+' must be numbers.
//! ```
//!
//! followed, when snippets are enabled, by the offending source line with a
//! caret underline.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto` mode, `is_tty` decides.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color and source snippets.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    snippets: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` decides both `ColorMode::Auto` and whether source snippets
    /// are shown.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            snippets: is_tty,
        }
    }

    #[must_use]
    pub fn with_snippets(mut self, snippets: bool) -> Self {
        self.snippets = snippets;
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one diagnostic against the source it was produced from.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) {
        let table = LineOffsetTable::build(source);
        let kind = diagnostic.kind().name();
        self.write_colored(kind, colors::ERROR);

        let primary = diagnostic.primary_span();
        if let Some(span) = primary {
            let pos = table.position(source, span);
            let _ = write!(self.writer, " at {pos}");
        }
        let _ = write!(self.writer, ": ");
        self.write_colored(&diagnostic.message, colors::BOLD);
        let _ = writeln!(self.writer);

        if self.snippets {
            self.emit_snippet(diagnostic, source, &table);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn emit_snippet(&mut self, diagnostic: &Diagnostic, source: &str, table: &LineOffsetTable) {
        let _ = write!(self.writer, "  --> ");
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer);

        for label in &diagnostic.labels {
            let (line, col) = table.offset_to_line_col(source, label.span.start);
            let Some(text) = table.line_text(source, line) else {
                continue;
            };
            let gutter = line.to_string();
            let pad = " ".repeat(gutter.len());

            self.write_colored(&format!("{pad} |"), colors::GUTTER);
            let _ = writeln!(self.writer);
            self.write_colored(&format!("{gutter} |"), colors::GUTTER);
            let _ = writeln!(self.writer, " {text}");
            self.write_colored(&format!("{pad} |"), colors::GUTTER);

            let width = underline_width(source, label.span.as_range(), text, col);
            let indent = " ".repeat(col.saturating_sub(1) as usize);
            let marker = if label.is_primary { "^" } else { "-" };
            let underline = marker.repeat(width);
            let _ = write!(self.writer, " {indent}");
            let color = if label.is_primary {
                colors::ERROR
            } else {
                colors::GUTTER
            };
            if label.message.is_empty() {
                self.write_colored(&underline, color);
            } else {
                self.write_colored(&format!("{underline} {}", label.message), color);
            }
            let _ = writeln!(self.writer);
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Number of carets: the span's characters on its first line, at least one.
fn underline_width(source: &str, range: std::ops::Range<usize>, line: &str, col: u32) -> usize {
    let spanned = source
        .get(range)
        .map_or(0, |s| s.lines().next().map_or(0, |l| l.chars().count()));
    let remaining = line
        .chars()
        .count()
        .saturating_sub(col.saturating_sub(1) as usize);
    spanned.min(remaining).max(1)
}

#[cfg(test)]
mod tests;
