//! SGR escape sequences.
//!
//! Every fixed sequence the compiler writes lives here as `const` data. The
//! truecolor forms are the only ones built at runtime.

use ziyy_ir::ColorName;

pub const RESET: &str = "\x1b[0m";

pub const BOLD: &str = "\x1b[1m";
pub const NO_BOLD: &str = "\x1b[22m";
pub const ITALIC: &str = "\x1b[3m";
pub const NO_ITALIC: &str = "\x1b[23m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const NO_UNDERLINE: &str = "\x1b[24m";
pub const STRIKE: &str = "\x1b[9m";
pub const NO_STRIKE: &str = "\x1b[29m";

/// Foreground codes `30..=37`, indexed by [`ColorName::index`].
pub const FG: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

/// Background codes `40..=47`, indexed by [`ColorName::index`].
pub const BG: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
];

#[inline]
pub fn fg(color: ColorName) -> &'static str {
    FG[usize::from(color.index())]
}

#[inline]
pub fn bg(color: ColorName) -> &'static str {
    BG[usize::from(color.index())]
}

/// `ESC[38;2;R;G;Bm`
pub fn rgb_fg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// `ESC[48;2;R;G;Bm`
pub fn rgb_bg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}
