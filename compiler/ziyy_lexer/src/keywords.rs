//! Keyword resolution for tag-mode identifiers.
//!
//! Uses the identifier's length as a first-pass filter (keywords are 1, 3-7
//! chars), then matches against the keywords of that length. Anything that
//! falls through is a plain [`TokenKind::Ident`], which the parser resolves
//! against the variable table or uses to match a closing tag.

use ziyy_ir::{ColorName, TokenKind};

/// Classify an identifier.
///
/// Always returns a kind: either the keyword kind or `TokenKind::Ident`.
#[inline]
pub(crate) fn classify(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}

/// Look up a keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        1 => match text {
            "b" => Some(TokenKind::Bold),
            "c" => Some(TokenKind::Fg),
            "i" => Some(TokenKind::Italic),
            "s" => Some(TokenKind::Strike),
            "u" => Some(TokenKind::Underline),
            "x" => Some(TokenKind::Bg),
            _ => None,
        },
        3 => match text {
            "red" => Some(TokenKind::Color(ColorName::Red)),
            "rgb" => Some(TokenKind::Rgb),
            _ => None,
        },
        4 => match text {
            "blue" => Some(TokenKind::Color(ColorName::Blue)),
            "cyan" => Some(TokenKind::Color(ColorName::Cyan)),
            _ => None,
        },
        5 => match text {
            "black" => Some(TokenKind::Color(ColorName::Black)),
            "green" => Some(TokenKind::Color(ColorName::Green)),
            "white" => Some(TokenKind::Color(ColorName::White)),
            _ => None,
        },
        6 => match text {
            "yellow" => Some(TokenKind::Color(ColorName::Yellow)),
            _ => None,
        },
        7 => match text {
            "magenta" => Some(TokenKind::Color(ColorName::Magenta)),
            _ => None,
        },
        _ => None,
    }
}
