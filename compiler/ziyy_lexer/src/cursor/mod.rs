//! Byte cursor over the markup source.
//!
//! The cursor walks the UTF-8 source byte by byte. Every structural character
//! of the markup is ASCII, so decisions are made on single bytes; multi-byte
//! characters are only ever skipped whole (see [`Cursor::advance_char`]) so
//! slices taken between two cursor positions are always valid `&str`.

/// Cursor over a borrowed source string.
///
/// [`Copy`], so the scanner can snapshot a start position cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The byte at the current position, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Advance by one byte.
    ///
    /// Only called on ASCII bytes the caller has already inspected.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Width in bytes of a UTF-8 character given its leading byte.
    #[inline]
    fn utf8_char_width(first: u8) -> usize {
        match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(b) = self.current() {
            let width = Self::utf8_char_width(b);
            self.pos = (self.pos + width).min(self.source.len());
        }
    }

    /// Advance past tag whitespace (space, tab, carriage return, newline).
    ///
    /// Returns the number of newlines skipped.
    pub fn eat_tag_whitespace(&mut self) -> u32 {
        let mut newlines = 0;
        while let Some(b) = self.current() {
            match b {
                b' ' | b'\t' | b'\r' => {}
                b'\n' => newlines += 1,
                _ => break,
            }
            self.pos += 1;
        }
        newlines
    }

    /// Advance while the current byte continues an identifier (`[A-Za-z0-9_]`).
    #[inline]
    pub fn eat_ident_continue(&mut self) {
        while let Some(b) = self.current() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Advance while the current byte is an ASCII digit.
    #[inline]
    pub fn eat_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.current() {
            self.pos += 1;
        }
    }

    /// Advance over ordinary text to the next `<` or `\`, or to EOF.
    ///
    /// Returns the number of newlines inside the skipped run. Uses
    /// `memchr2` for the delimiter search and `memchr_iter` for the count.
    pub fn skip_to_text_delim(&mut self) -> u32 {
        let remaining = &self.source.as_bytes()[self.pos..];
        let run_len = memchr::memchr2(b'<', b'\\', remaining).unwrap_or(remaining.len());
        let newlines = memchr::memchr_iter(b'\n', &remaining[..run_len]).count();
        self.pos += run_len;
        u32::try_from(newlines).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests;
