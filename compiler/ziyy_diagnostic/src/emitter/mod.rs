//! Diagnostic Emitters
//!
//! Rendering of [`Diagnostic`] values for humans. The terminal emitter is the
//! only format; the trait keeps the CLI independent of it.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing summary line.
    fn emit_summary(&mut self, error_count: usize);
}
