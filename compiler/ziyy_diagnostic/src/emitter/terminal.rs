//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When
//! the markup source is attached, labels are rendered under the offending
//! source line with a caret underline.

use std::io::{self, Write};

use ziyy_ir::Span;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The source line containing a span, with the span's column and width in
/// characters. `None` when the span does not land inside `source`.
fn locate(source: &str, span: Span) -> Option<(&str, usize, usize)> {
    let range = span.to_range();
    if range.start > source.len() || !source.is_char_boundary(range.start) {
        return None;
    }
    let line_start = source[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[range.start..]
        .find('\n')
        .map_or(source.len(), |i| range.start + i);
    let line = source[line_start..line_end].trim_end_matches('\r');
    let column = source[line_start..range.start].chars().count();
    let end = range.end.clamp(range.start, line_end);
    let width = source
        .get(range.start..end)
        .map_or(0, |s| s.chars().count())
        .max(1);
    Some((line, column, width))
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the markup the diagnostics refer to, enabling source snippets.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let snippet = self
            .source
            .as_deref()
            .and_then(|src| locate(src, label.span))
            .map(|(line, column, width)| (line.to_owned(), column, width));

        let _ = write!(self.writer, "  {marker} line {}, {:?}", label.line, label.span);
        let Some((line_text, column, width)) = snippet else {
            let _ = write!(self.writer, ": ");
            self.write_colored(&label.message, Self::label_color(label));
            let _ = writeln!(self.writer);
            return;
        };
        let _ = writeln!(self.writer);

        let line_no = label.line.to_string();
        let gutter = " ".repeat(line_no.len());
        let underline = if label.is_primary { "^" } else { "-" }.repeat(width);

        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {line_no} | {line_text}");
        let _ = write!(self.writer, " {gutter} | {}", " ".repeat(column));
        self.write_colored(
            &format!("{underline} {}", label.message),
            Self::label_color(label),
        );
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}
