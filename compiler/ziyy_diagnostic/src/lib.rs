//! Diagnostic system for ziyy markup errors.
//!
//! Every failure the compiler reports carries:
//! - an error code for `--explain` lookups,
//! - a message saying what went wrong,
//! - a primary label with the span and line where it went wrong,
//! - optional notes and suggestions.
//!
//! Rendering lives in [`emitter`]; the compiler crates only build
//! [`Diagnostic`] values.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
