//! Hand-written scanner producing [`Token`] values one at a time.
//!
//! The scanner is driven by [`ScanState`]: text mode yields whole runs of
//! literal text, tag mode yields keywords, identifiers, numbers and
//! punctuation. Errors are encoded as [`TokenKind::Error`] tokens, not as
//! `Result::Err`; the parser decides what to do with them.
//!
//! Line numbers are tracked here rather than recomputed from spans, so each
//! token carries the 1-based line it starts on.

use ziyy_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;
use crate::state::{Escape, ScanState};

/// Error code for a character that cannot start any tag-mode token.
pub const UNEXPECTED_CHARACTER: u8 = 1;

/// Pull-based scanner over a borrowed source.
///
/// After the first `Eof` every further call returns `Eof` again.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    line: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: ScanState::default(),
            line: 1,
        }
    }

    /// Current lexical mode.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Produce the next token.
    pub fn scan_next(&mut self) -> Token<'a> {
        let token = match self.state {
            ScanState::Text(Escape::PendingLiteral) => self.escaped_literal(),
            ScanState::Text(_) => self.text(),
            ScanState::Tag => self.tag(),
        };
        self.state = self.state.advance(token.kind, self.cursor.current());
        token
    }

    // ─── Text mode ──────────────────────────────────────────────────────

    fn text(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            None => self.eof(),
            Some(b'<') => self.single(start, TokenKind::OpenTag),
            Some(b'>') => self.single(start, TokenKind::CloseTag),
            Some(b'\\') => self.single(start, TokenKind::BackSlash),
            Some(_) => {
                let line = self.line;
                self.line += self.cursor.skip_to_text_delim();
                self.make(TokenKind::Text, start, line)
            }
        }
    }

    /// The character after a `\`, emitted verbatim as text.
    fn escaped_literal(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        let line = self.line;
        match self.cursor.current() {
            None => self.eof(),
            Some(b) => {
                if b == b'\n' {
                    self.line += 1;
                }
                self.cursor.advance_char();
                self.make(TokenKind::Text, start, line)
            }
        }
    }

    // ─── Tag mode ───────────────────────────────────────────────────────

    fn tag(&mut self) -> Token<'a> {
        self.line += self.cursor.eat_tag_whitespace();
        let start = self.cursor.pos();
        match self.cursor.current() {
            None => self.eof(),
            Some(b'<') => self.single(start, TokenKind::OpenTag),
            Some(b'>') => self.single(start, TokenKind::CloseTag),
            Some(b'a'..=b'z' | b'A'..=b'Z' | b'_') => self.identifier(start),
            Some(b'0'..=b'9') => self.number(start),
            Some(b'(') => self.single(start, TokenKind::LeftParen),
            Some(b')') => self.single(start, TokenKind::RightParen),
            Some(b',') => self.single(start, TokenKind::Comma),
            Some(b'.') => self.single(start, TokenKind::Dot),
            Some(b'/') => self.single(start, TokenKind::Slash),
            Some(_) => self.invalid_char(start),
        }
    }

    fn identifier(&mut self, start: usize) -> Token<'a> {
        self.cursor.advance();
        self.cursor.eat_ident_continue();
        let kind = keywords::classify(self.cursor.slice_from(start));
        self.make(kind, start, self.line)
    }

    fn number(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_digits();
        self.make(TokenKind::Number, start, self.line)
    }

    fn invalid_char(&mut self, start: usize) -> Token<'a> {
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start);
        let span = Span::saturating_from_range(start..self.cursor.pos());
        Token::error(UNEXPECTED_CHARACTER, text, span, self.line)
    }

    // ─── Helpers ────────────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.make(kind, start, self.line)
    }

    #[inline]
    fn make(&self, kind: TokenKind, start: usize, line: u32) -> Token<'a> {
        let span = Span::saturating_from_range(start..self.cursor.pos());
        Token::new(kind, self.cursor.slice_from(start), span, line)
    }

    fn eof(&self) -> Token<'a> {
        let span = Span::point(u32::try_from(self.cursor.pos()).unwrap_or(u32::MAX));
        Token::new(TokenKind::Eof, "", span, self.line)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields every token up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.scan_next();
        (!token.is_eof()).then_some(token)
    }
}

#[cfg(test)]
mod tests;
