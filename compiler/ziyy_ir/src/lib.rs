//! Shared vocabulary of the ziyy compiler.
//!
//! This crate holds the small value types every other stage agrees on:
//! - [`Span`] for byte ranges in the markup source
//! - [`Token`] and [`TokenKind`] produced by the scanner
//! - [`ColorName`], the eight named terminal colors
//!
//! Everything here is `Copy` and borrows from the source string; nothing
//! allocates.

mod span;
mod token;

pub use span::Span;
pub use token::{ColorName, Token, TokenKind};
