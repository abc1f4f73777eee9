//! Single-pass markup compiler.
//!
//! The parser pulls tokens from the scanner on demand and writes text and
//! escape sequences to the sink as it goes. There is no tree and no
//! backtracking: each tag production reads only the tokens it needs and must
//! end with `>`. A tag's escape sequence is written as soon as its body is
//! known, before the `>` is checked. The first violation aborts the pass;
//! whatever was written before it stays in the sink.

use std::borrow::Cow;
use std::io::Write;

use tracing::{debug, trace};
use ziyy_ir::{Token, TokenKind};
use ziyy_lexer::Scanner;

use crate::error::{CompileError, ParseError, ParseErrorKind};
use crate::sgr;
use crate::state::{Attribute, StyleStack};
use crate::variables::Variables;

/// Compiler state for one pass over one source string.
pub struct Parser<'src, 'v, W: Write> {
    scanner: Scanner<'src>,
    variables: &'v Variables,
    out: W,
    state: StyleStack<'src>,
}

impl<'src, 'v, W: Write> Parser<'src, 'v, W> {
    pub fn new(source: &'src str, variables: &'v Variables, out: W) -> Self {
        Parser {
            scanner: Scanner::new(source),
            variables,
            out,
            state: StyleStack::new(),
        }
    }

    /// Compile the whole source into the sink.
    ///
    /// Output starts and ends with [`sgr::RESET`]. Tags still open at end of
    /// input are not an error.
    pub fn parse_to_out(&mut self) -> Result<(), CompileError> {
        self.write(sgr::RESET)?;
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Text => self.write(token.text)?,
                TokenKind::Slash => self.close_tag()?,
                kind if kind == TokenKind::Ident || kind.is_color_keyword() => {
                    self.open_variable(token)?;
                }
                TokenKind::Eof => return self.finish(),
                kind => match Attribute::from_kind(kind) {
                    Some(attribute) if attribute.is_toggle() => self.open_toggle(attribute, token)?,
                    Some(attribute) => self.open_color(attribute, token)?,
                    // `<`, stray `>`, `\` and punctuation outside a production
                    None => {}
                },
            }
        }
    }

    fn finish(&mut self) -> Result<(), CompileError> {
        let unclosed = self.state.depth();
        if unclosed > 0 {
            debug!(
                unclosed,
                innermost = self.state.current_tag(),
                "end of input with open tags"
            );
        }
        self.write(sgr::RESET)?;
        self.out.flush()?;
        Ok(())
    }

    // ─── Token plumbing ─────────────────────────────────────────────────

    /// Next token; lexical errors fail here, wherever they occur.
    fn next_token(&mut self) -> Result<Token<'src>, ParseError> {
        let token = self.scanner.scan_next();
        trace!(kind = ?token.kind, text = token.text, line = token.line, "token");
        if token.kind == TokenKind::Error {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedCharacter {
                    found: token.text.to_owned(),
                    code: token.error_code,
                },
                token.span,
                token.line,
            ));
        }
        Ok(token)
    }

    #[inline]
    fn write(&mut self, s: &str) -> Result<(), CompileError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    #[cold]
    fn error_at(kind: ParseErrorKind, token: &Token<'_>) -> ParseError {
        ParseError::new(kind, token.span, token.line)
    }

    fn expect_close_tag(&mut self) -> Result<(), ParseError> {
        let token = self.next_token()?;
        if token.kind == TokenKind::CloseTag {
            Ok(())
        } else {
            Err(Self::error_at(
                ParseErrorKind::MissingCloseTag { found: token.kind },
                &token,
            ))
        }
    }

    fn expect_rgb(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        let token = self.next_token()?;
        if token.kind == expected {
            Ok(())
        } else {
            Err(Self::error_at(
                ParseErrorKind::MalformedRgb {
                    expected,
                    found: token.kind,
                },
                &token,
            ))
        }
    }

    // ─── Opening tags ───────────────────────────────────────────────────

    /// `<b>`, `<i>`, `<u>`, `<s>`
    fn open_toggle(&mut self, attribute: Attribute, token: Token<'src>) -> Result<(), CompileError> {
        let code = attribute.on_code().unwrap_or_default();
        self.state.push(&token, None, code);
        self.write(code)?;
        Ok(self.expect_close_tag()?)
    }

    /// `<c.COLOR>`, `<c.rgb(R,G,B)>` and the `x` forms.
    fn open_color(&mut self, attribute: Attribute, token: Token<'src>) -> Result<(), CompileError> {
        let marker = attribute.marker().unwrap_or_default();
        let dot = self.next_token()?;
        if dot.kind != TokenKind::Dot {
            return Err(Self::error_at(ParseErrorKind::ExpectedDot { marker }, &dot).into());
        }

        let value = self.next_token()?;
        let (keyword, code): (&'static str, Cow<'static, str>) = match value.kind {
            TokenKind::Color(color) => {
                let code = if attribute == Attribute::Bg {
                    sgr::bg(color)
                } else {
                    sgr::fg(color)
                };
                (color.as_str(), Cow::Borrowed(code))
            }
            TokenKind::Rgb => {
                self.expect_rgb(TokenKind::LeftParen)?;
                let (r, g, b) = self.rgb_components()?;
                let code = if attribute == Attribute::Bg {
                    sgr::rgb_bg(r, g, b)
                } else {
                    sgr::rgb_fg(r, g, b)
                };
                ("rgb", Cow::Owned(code))
            }
            found => {
                return Err(Self::error_at(ParseErrorKind::ExpectedColor { found }, &value).into())
            }
        };

        self.state.push(&token, Some(keyword), &code);
        self.write(&code)?;
        Ok(self.expect_close_tag()?)
    }

    /// `R , G , B )`, after the opening parenthesis.
    fn rgb_components(&mut self) -> Result<(u8, u8, u8), ParseError> {
        let r = self.rgb_component()?;
        self.expect_rgb(TokenKind::Comma)?;
        let g = self.rgb_component()?;
        self.expect_rgb(TokenKind::Comma)?;
        let b = self.rgb_component()?;
        self.expect_rgb(TokenKind::RightParen)?;
        Ok((r, g, b))
    }

    fn rgb_component(&mut self) -> Result<u8, ParseError> {
        let token = self.next_token()?;
        if token.kind != TokenKind::Number {
            return Err(Self::error_at(
                ParseErrorKind::MalformedRgb {
                    expected: TokenKind::Number,
                    found: token.kind,
                },
                &token,
            ));
        }
        // digits only, so the parse can only fail on overflow
        token.text.parse::<u8>().map_err(|_| {
            Self::error_at(
                ParseErrorKind::RgbOutOfRange {
                    component: token.text.to_owned(),
                },
                &token,
            )
        })
    }

    /// `<name>`: a bare identifier or color word resolved in the variable table.
    fn open_variable(&mut self, token: Token<'src>) -> Result<(), CompileError> {
        let variables = self.variables;
        let Some(value) = variables.get(token.text) else {
            return Err(Self::error_at(
                ParseErrorKind::UnknownVariable {
                    name: token.text.to_owned(),
                },
                &token,
            )
            .into());
        };
        self.state.push(&token, None, value);
        self.write(value)?;
        Ok(self.expect_close_tag()?)
    }

    // ─── Closing tags ───────────────────────────────────────────────────

    /// Everything after `</`.
    fn close_tag(&mut self) -> Result<(), CompileError> {
        let name = self.next_token()?;
        match name.kind {
            TokenKind::Ident => {
                self.check_top(name.text, &name, |top, _| top == name.text)?;
                self.restore(Attribute::Variable)?;
            }
            // `/green` closes a variable named `green` or a `c`/`x` frame
            // opened with that keyword
            kind if kind.is_color_keyword() => {
                self.check_top(name.text, &name, |top, keyword| {
                    top == name.text || (is_color_marker(top) && keyword == Some(name.text))
                })?;
                self.restore(Attribute::Variable)?;
            }
            kind => match Attribute::from_kind(kind) {
                Some(attribute) if attribute.is_toggle() => {
                    self.check_top(name.text, &name, |top, _| top == name.text)?;
                    self.restore(attribute)?;
                }
                Some(attribute) => return self.close_color(attribute, name),
                None => {
                    return Err(
                        Self::error_at(ParseErrorKind::ExpectedTagName { found: kind }, &name).into(),
                    )
                }
            },
        }
        Ok(self.expect_close_tag()?)
    }

    /// `/c`, `/c.COLOR`, `/c.rgb`, `/c.rgb(R,G,B)` and the `x` forms.
    fn close_color(&mut self, attribute: Attribute, marker: Token<'src>) -> Result<(), CompileError> {
        let mut next = self.next_token()?;
        let keyword = if next.kind == TokenKind::Dot {
            let value = self.next_token()?;
            let keyword = match value.kind {
                TokenKind::Color(color) => color.as_str(),
                TokenKind::Rgb => "rgb",
                found => {
                    return Err(Self::error_at(ParseErrorKind::ExpectedColor { found }, &value).into())
                }
            };
            next = self.next_token()?;
            Some(keyword)
        } else {
            None
        };

        let found = match keyword {
            Some(keyword) => format!("{}.{keyword}", marker.text),
            None => marker.text.to_owned(),
        };
        self.check_top(&found, &marker, |top, top_keyword| {
            top == marker.text && keyword.map_or(true, |k| top_keyword == Some(k))
        })?;
        self.restore(attribute)?;

        match next.kind {
            TokenKind::CloseTag => Ok(()),
            // arguments are checked for syntax only
            TokenKind::LeftParen if keyword == Some("rgb") => {
                self.rgb_components()?;
                Ok(self.expect_close_tag()?)
            }
            found => Err(Self::error_at(ParseErrorKind::MissingCloseTag { found }, &next).into()),
        }
    }

    /// Fail with a mismatch unless `accepts(tag, keyword)` holds for the top frame.
    fn check_top(
        &self,
        found: &str,
        at: &Token<'src>,
        accepts: impl FnOnce(&str, Option<&'static str>) -> bool,
    ) -> Result<(), ParseError> {
        let innermost = self.state.innermost();
        if innermost.is_some_and(|frame| accepts(frame.tag, frame.keyword)) {
            return Ok(());
        }
        let expected = innermost.map(|frame| match frame.keyword {
            Some(keyword) => format!("{}.{keyword}", frame.tag),
            None => frame.tag.to_owned(),
        });
        Err(Self::error_at(
            ParseErrorKind::MismatchedClose {
                expected,
                found: found.to_owned(),
                opened: innermost.map(|frame| (frame.span, frame.line)),
            },
            at,
        ))
    }

    /// Pop the top frame and write what undoes it.
    fn restore(&mut self, attribute: Attribute) -> Result<(), CompileError> {
        if let Some(seq) = self.state.pop_and_restore(attribute) {
            self.out.write_all(seq.as_bytes())?;
        }
        Ok(())
    }
}

#[inline]
fn is_color_marker(tag: &str) -> bool {
    matches!(tag, "c" | "x")
}
