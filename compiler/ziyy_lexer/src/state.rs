//! The scanner's lexical state machine.
//!
//! The markup has two lexical modes. Outside tags everything is literal text
//! except `<`, `>` and the `\` escape; inside tags the scanner produces
//! keywords, identifiers, numbers and punctuation. The escape is spread over
//! two scan calls: the `\` marker first, then the escaped character as text.
//!
//! ```text
//!             `<`                         `>`
//!   Text(_) ───────────────▶ Tag ───────────────▶ Text(None)
//!
//!   Text(None) ──text run ending before `\`──▶ Text(PendingBackslash)
//!   Text(_)    ──`\`──────────────────────────▶ Text(PendingLiteral)
//!   Text(PendingLiteral) ──escaped char──────▶ Text(None)
//! ```

use ziyy_ir::TokenKind;

/// Escape sub-state, only meaningful in text mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Escape {
    #[default]
    None,
    /// The last text run stopped in front of a `\`.
    PendingBackslash,
    /// A `\` was emitted; the next character is literal text.
    PendingLiteral,
}

/// Lexical mode of the scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    Text(Escape),
    Tag,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState::Text(Escape::None)
    }
}

impl ScanState {
    /// Whether the scanner is inside a `<` … `>` span.
    #[inline]
    pub const fn is_tag(self) -> bool {
        matches!(self, ScanState::Tag)
    }

    /// State after emitting a token of kind `emitted`.
    ///
    /// `lookahead` is the byte the cursor rests on after the token, `None` at
    /// end of input. Pure: the scanner calls it once per token and stores the
    /// result.
    pub const fn advance(self, emitted: TokenKind, lookahead: Option<u8>) -> ScanState {
        match (self, emitted) {
            (_, TokenKind::OpenTag) => ScanState::Tag,
            (_, TokenKind::CloseTag) => ScanState::Text(Escape::None),
            (ScanState::Text(_), TokenKind::BackSlash) => ScanState::Text(Escape::PendingLiteral),
            (ScanState::Text(_), TokenKind::Text) => match lookahead {
                Some(b'\\') => ScanState::Text(Escape::PendingBackslash),
                _ => ScanState::Text(Escape::None),
            },
            (state, _) => state,
        }
    }
}
