//! Scanner for ziyy markup.
//!
//! Turns markup source into [`ziyy_ir::Token`] values, one per
//! [`Scanner::scan_next`] call. The scanner never fails: characters it
//! cannot classify come back as [`ziyy_ir::TokenKind::Error`] tokens carrying
//! [`UNEXPECTED_CHARACTER`].
//!
//! ```
//! use ziyy_ir::TokenKind;
//! use ziyy_lexer::Scanner;
//!
//! let kinds: Vec<_> = Scanner::new("<b>hi").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::OpenTag, TokenKind::Bold, TokenKind::CloseTag, TokenKind::Text]
//! );
//! ```

mod cursor;
mod keywords;
mod scanner;
mod state;

pub use scanner::{Scanner, UNEXPECTED_CHARACTER};
pub use state::{Escape, ScanState};
