//! Token types produced by the ziyy scanner.
//!
//! A [`Token`] is a classified slice of the markup source. The scanner hands
//! them out one at a time; the parser never looks further than the token it
//! just pulled.

use super::Span;
use std::fmt;

/// A classified slice of the source.
///
/// `error_code` is `0` for every token except [`TokenKind::Error`], where it
/// carries the lexer's numeric reason (see `ziyy_lexer::UNEXPECTED_CHARACTER`).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    /// 1-based line on which the token starts.
    pub line: u32,
    pub error_code: u8,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, line: u32) -> Self {
        Token {
            kind,
            text,
            span,
            line,
            error_code: 0,
        }
    }

    /// Create a lex-error token carrying `code`.
    #[inline]
    pub fn error(code: u8, text: &'src str, span: Span, line: u32) -> Self {
        Token {
            kind: TokenKind::Error,
            text,
            span,
            line,
            error_code: code,
        }
    }

    /// Whether this token ends the stream.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {} (line {})", self.kind, self.text, self.span, self.line)
    }
}

/// Closed set of token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Structural
    /// `<`
    OpenTag,
    /// `>`
    CloseTag,
    /// `.`
    Dot,
    /// `/`
    Slash,
    /// `\` in text, announcing an escaped character.
    BackSlash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,

    // Literals
    /// A run of literal text outside tags.
    Text,
    /// An identifier that is not a keyword.
    Ident,
    /// A decimal number.
    Number,

    // Style markers
    /// `b`
    Bold,
    /// `i`
    Italic,
    /// `u`
    Underline,
    /// `s`
    Strike,
    /// `c`, foreground color.
    Fg,
    /// `x`, background color.
    Bg,

    // Color keywords
    Color(ColorName),
    /// `rgb`
    Rgb,

    // Terminal markers
    Eof,
    Error,
}

impl TokenKind {
    /// True for the words that name a color: the eight names and `rgb`.
    #[inline]
    pub fn is_color_keyword(self) -> bool {
        matches!(self, TokenKind::Color(_) | TokenKind::Rgb)
    }

    /// Fixed source text of the kind, if it has one.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::OpenTag => "<",
            TokenKind::CloseTag => ">",
            TokenKind::Dot => ".",
            TokenKind::Slash => "/",
            TokenKind::BackSlash => "\\",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Bold => "b",
            TokenKind::Italic => "i",
            TokenKind::Underline => "u",
            TokenKind::Strike => "s",
            TokenKind::Fg => "c",
            TokenKind::Bg => "x",
            TokenKind::Color(name) => name.as_str(),
            TokenKind::Rgb => "rgb",
            TokenKind::Text
            | TokenKind::Ident
            | TokenKind::Number
            | TokenKind::Eof
            | TokenKind::Error => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lexeme) = self.lexeme() {
            return write!(f, "`{lexeme}`");
        }
        match self {
            TokenKind::Text => write!(f, "text"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "invalid character"),
        }
    }
}

/// The eight named terminal colors, in SGR order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorName {
    pub const ALL: [ColorName; 8] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
    ];

    /// Keyword spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
        }
    }

    /// Position in the SGR palette (`30 + index` / `40 + index`).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
