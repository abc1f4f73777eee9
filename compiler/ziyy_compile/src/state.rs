//! Style state stack.
//!
//! One frame per open tag. Each frame stores the full escape sequence that
//! recreates the visual state inside it, so closing a composing tag is a
//! single write of the new top frame's `save`. The base frame is a sentinel
//! holding [`sgr::RESET`] and is never popped.

use smallvec::SmallVec;
use tracing::debug;
use ziyy_ir::{Span, Token, TokenKind};

use crate::sgr;

/// Frames kept inline before the stack spills to the heap.
const INLINE_FRAMES: usize = 8;

/// One open tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Tag name as written: `b`, `c`, or a variable name. Empty for the sentinel.
    pub tag: &'a str,
    /// Color keyword a `c`/`x` frame was opened with (`red`, `rgb`, ...).
    pub keyword: Option<&'static str>,
    /// Cumulative escape sequence of the state inside this frame.
    pub save: String,
    /// Span of the tag name in the opening tag.
    pub span: Span,
    /// Line of the opening tag. 0 for the sentinel.
    pub line: u32,
}

/// What closing an attribute writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Restore {
    /// A fixed "off" code, regardless of enclosing frames.
    Fixed(&'static str),
    /// The `save` of the frame below the closed one.
    Replay,
}

/// Attribute families the grammar knows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    Underline,
    Strike,
    Fg,
    Bg,
    Variable,
}

impl Attribute {
    /// The attribute a tag-mode keyword opens, if any.
    pub fn from_kind(kind: TokenKind) -> Option<Attribute> {
        match kind {
            TokenKind::Bold => Some(Attribute::Bold),
            TokenKind::Italic => Some(Attribute::Italic),
            TokenKind::Underline => Some(Attribute::Underline),
            TokenKind::Strike => Some(Attribute::Strike),
            TokenKind::Fg => Some(Attribute::Fg),
            TokenKind::Bg => Some(Attribute::Bg),
            _ => None,
        }
    }

    /// Single-letter tag name. Variables are named by their identifier.
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Attribute::Bold => Some("b"),
            Attribute::Italic => Some("i"),
            Attribute::Underline => Some("u"),
            Attribute::Strike => Some("s"),
            Attribute::Fg => Some("c"),
            Attribute::Bg => Some("x"),
            Attribute::Variable => None,
        }
    }

    /// Fixed "on" code of a toggle attribute.
    pub const fn on_code(self) -> Option<&'static str> {
        match self {
            Attribute::Bold => Some(sgr::BOLD),
            Attribute::Italic => Some(sgr::ITALIC),
            Attribute::Underline => Some(sgr::UNDERLINE),
            Attribute::Strike => Some(sgr::STRIKE),
            Attribute::Fg | Attribute::Bg | Attribute::Variable => None,
        }
    }

    pub const fn restore(self) -> Restore {
        match self {
            Attribute::Bold => Restore::Fixed(sgr::NO_BOLD),
            Attribute::Italic => Restore::Fixed(sgr::NO_ITALIC),
            Attribute::Underline => Restore::Fixed(sgr::NO_UNDERLINE),
            Attribute::Strike => Restore::Fixed(sgr::NO_STRIKE),
            Attribute::Fg | Attribute::Bg | Attribute::Variable => Restore::Replay,
        }
    }

    /// `b`, `i`, `u` and `s`: closed with a fixed off code.
    pub const fn is_toggle(self) -> bool {
        matches!(self.restore(), Restore::Fixed(_))
    }
}

/// Stack of open tag frames over a permanent sentinel.
#[derive(Clone, Debug)]
pub struct StyleStack<'a> {
    frames: SmallVec<[Frame<'a>; INLINE_FRAMES]>,
}

impl<'a> StyleStack<'a> {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame {
            tag: "",
            keyword: None,
            save: sgr::RESET.to_owned(),
            span: Span::default(),
            line: 0,
        });
        StyleStack { frames }
    }

    #[inline]
    fn top(&self) -> &Frame<'a> {
        // frames[0] is the sentinel, so last() is always Some
        &self.frames[self.frames.len() - 1]
    }

    /// Open a frame for the tag named by `opener`, whose `save` is the
    /// current `save` followed by `code`.
    pub fn push(&mut self, opener: &Token<'a>, keyword: Option<&'static str>, code: &str) {
        let mut save = String::with_capacity(self.top().save.len() + code.len());
        save.push_str(&self.top().save);
        save.push_str(code);
        self.frames.push(Frame {
            tag: opener.text,
            keyword,
            save,
            span: opener.span,
            line: opener.line,
        });
        debug!(tag = opener.text, ?keyword, depth = self.depth(), "push frame");
    }

    /// Remove the top frame. `None` when only the sentinel is left.
    pub fn pop(&mut self) -> Option<Frame<'a>> {
        if self.frames.len() <= 1 {
            return None;
        }
        let frame = self.frames.pop();
        debug!(tag = frame.as_ref().map(|f| f.tag), depth = self.depth(), "pop frame");
        frame
    }

    /// Pop the top frame and return the sequence that undoes it.
    pub fn pop_and_restore(&mut self, attribute: Attribute) -> Option<&str> {
        self.pop()?;
        Some(match attribute.restore() {
            Restore::Fixed(off) => off,
            Restore::Replay => self.current_save(),
        })
    }

    /// The innermost open frame, `None` when only the sentinel is left.
    #[inline]
    pub fn innermost(&self) -> Option<&Frame<'a>> {
        self.frames[1..].last()
    }

    #[inline]
    pub fn current_tag(&self) -> &'a str {
        self.top().tag
    }

    #[inline]
    pub fn current_save(&self) -> &str {
        &self.top().save
    }

    /// Number of open frames above the sentinel.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}

impl Default for StyleStack<'_> {
    fn default() -> Self {
        Self::new()
    }
}
