//! Compile error types.
//!
//! A compile pass fails on the first grammar violation, so there is exactly
//! one [`ParseError`] per failure. Each kind maps to a stable [`ErrorCode`]
//! and renders as a [`Diagnostic`].

use std::io;

use thiserror::Error;
use ziyy_diagnostic::{Diagnostic, ErrorCode};
use ziyy_ir::{Span, TokenKind};

/// Failure of a compile pass.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CompileError {
    /// The diagnostic for a markup error; `None` for I/O failures.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            CompileError::Parse(err) => Some(err.to_diagnostic()),
            CompileError::Io(_) => None,
        }
    }
}

/// A grammar violation at a known place in the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (line {line})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected character `{found}` in tag")]
    UnexpectedCharacter { found: String, code: u8 },

    #[error("expected `>`, found {found}")]
    MissingCloseTag { found: TokenKind },

    #[error("mismatched closing tag `{found}`: {}", open_tag(.expected.as_deref()))]
    MismatchedClose {
        /// Innermost open tag, `None` when no tag is open.
        expected: Option<String>,
        found: String,
        /// Span and line of the innermost open tag's name.
        opened: Option<(Span, u32)>,
    },

    #[error("expected `.` after `{marker}`")]
    ExpectedDot { marker: &'static str },

    #[error("expected a color, found {found}")]
    ExpectedColor { found: TokenKind },

    #[error("malformed rgb color: expected {expected}, found {found}")]
    MalformedRgb {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("rgb component `{component}` is out of range")]
    RgbOutOfRange { component: String },

    #[error("unknown variable `{name}`")]
    UnknownVariable { name: String },

    #[error("expected a tag name after `/`, found {found}")]
    ExpectedTagName { found: TokenKind },
}

fn open_tag(expected: Option<&str>) -> String {
    match expected {
        Some(tag) => format!("the open tag is `{tag}`"),
        None => "no tag is open".to_owned(),
    }
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            ParseErrorKind::MissingCloseTag { .. } => ErrorCode::E1001,
            ParseErrorKind::MismatchedClose { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedDot { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedColor { .. } => ErrorCode::E1004,
            ParseErrorKind::MalformedRgb { .. } => ErrorCode::E1005,
            ParseErrorKind::RgbOutOfRange { .. } => ErrorCode::E1006,
            ParseErrorKind::UnknownVariable { .. } => ErrorCode::E1007,
            ParseErrorKind::ExpectedTagName { .. } => ErrorCode::E1008,
        }
    }

    /// Short text for the primary label.
    fn label(&self) -> String {
        match self {
            ParseErrorKind::UnexpectedCharacter { .. } => "not allowed inside a tag".to_owned(),
            ParseErrorKind::MissingCloseTag { .. } => "expected `>` here".to_owned(),
            ParseErrorKind::MismatchedClose { found, .. } => format!("`{found}` closed here"),
            ParseErrorKind::ExpectedDot { .. } => "expected `.` here".to_owned(),
            ParseErrorKind::ExpectedColor { .. } => "not a color".to_owned(),
            ParseErrorKind::MalformedRgb { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::RgbOutOfRange { .. } => "must be at most 255".to_owned(),
            ParseErrorKind::UnknownVariable { .. } => "not in the variable table".to_owned(),
            ParseErrorKind::ExpectedTagName { .. } => "expected a tag name".to_owned(),
        }
    }
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span, line: u32) -> Self {
        ParseError { kind, span, line }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.line, self.kind.label());

        match &self.kind {
            ParseErrorKind::UnexpectedCharacter { .. } => {
                diag.with_suggestion("write a literal `<` in text as `\\<`")
            }
            ParseErrorKind::MismatchedClose {
                expected: Some(tag),
                opened,
                ..
            } => {
                let diag = match opened {
                    Some((span, line)) => {
                        diag.with_secondary_label(*span, *line, format!("`{tag}` opened here"))
                    }
                    None => diag,
                };
                diag.with_note("tags close in reverse order of opening")
                    .with_suggestion(format!("close it with `</{tag}>`"))
            }
            ParseErrorKind::ExpectedColor { .. } => diag.with_note(
                "colors are black, red, green, yellow, blue, magenta, cyan, white and rgb(R, G, B)",
            ),
            ParseErrorKind::RgbOutOfRange { .. } => {
                diag.with_note("rgb components range from 0 to 255")
            }
            ParseErrorKind::UnknownVariable { .. } => {
                diag.with_note("bare tag names are looked up in the variable table")
            }
            _ => diag,
        }
    }
}
