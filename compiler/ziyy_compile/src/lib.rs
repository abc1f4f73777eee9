//! Compiler from ziyy tag markup to ANSI SGR escape sequences.
//!
//! ```
//! let out = ziyy_compile::style("<b>hi</b>").unwrap();
//! assert_eq!(out, "\x1b[0m\x1b[1mhi\x1b[22m\x1b[0m");
//!
//! let warn = ziyy_compile::template("<b><c.yellow>");
//! assert_eq!(warn("careful").unwrap(), "\x1b[0m\x1b[1m\x1b[33mcareful\x1b[0m");
//! ```
//!
//! Composing tags (`c`, `x` and variables) restore the enclosing state when
//! they close; `b`, `i`, `u` and `s` close with their fixed off code.

mod error;
mod parser;
pub mod sgr;
mod state;
mod variables;

use std::io::{self, Write};

pub use error::{CompileError, ParseError, ParseErrorKind};
pub use parser::Parser;
pub use state::{Attribute, Frame, Restore, StyleStack};
pub use variables::Variables;

/// Compile `source` into `out`.
///
/// On failure, everything written before the error stays in `out`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile<W: Write + ?Sized>(
    source: &str,
    variables: &Variables,
    out: &mut W,
) -> Result<(), CompileError> {
    Parser::new(source, variables, out).parse_to_out()
}

/// Compile `source` into a new string.
pub fn compile_to_string(source: &str, variables: &Variables) -> Result<String, CompileError> {
    let mut buf = Vec::with_capacity(source.len() + 16);
    compile(source, variables, &mut buf)?;
    String::from_utf8(buf).map_err(|e| CompileError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Compile `source` with no variables; only built-in tags are recognized.
pub fn style(source: &str) -> Result<String, CompileError> {
    compile_to_string(source, &Variables::empty())
}

/// A styling function that compiles `prefix` followed by its argument.
///
/// Tags opened in `prefix` stay open over the text and are reset at its end.
pub fn template(prefix: &str) -> impl Fn(&str) -> Result<String, CompileError> + '_ {
    move |text: &str| {
        let mut source = String::with_capacity(prefix.len() + text.len());
        source.push_str(prefix);
        source.push_str(text);
        style(&source)
    }
}
