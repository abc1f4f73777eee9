//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks the compiler uses
//! to report failures. Every diagnostic is an error: a compile pass stops at
//! the first one.

use std::fmt;
use ziyy_ir::Span;

use crate::ErrorCode;

/// A labeled span with a message.
///
/// Markup sources are single documents, so a label is a byte span plus the
/// 1-based line the span starts on.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: u32,
    /// The label text explaining this location.
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(span: Span, line: u32, message: impl Into<String>) -> Self {
        Label {
            span,
            line,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(span: Span, line: u32, message: impl Into<String>) -> Self {
        Label {
            span,
            line,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with all context needed for a readable error message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled spans showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Text suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, line: u32, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, line, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(
        mut self,
        span: Span,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::secondary(span, line, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The primary label, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|l| l.is_primary)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(label) = self.primary_label() {
            write!(f, " (line {})", label.line)?;
        }
        Ok(())
    }
}
