//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1002`) with the first digit
//! indicating the compiler phase. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Tag syntax errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Character that cannot appear inside a tag
    E0001,

    // Syntax Errors (E1xxx)
    /// Tag not terminated by `>`
    E1001,
    /// Closing tag does not match the innermost open tag
    E1002,
    /// `c` or `x` not followed by `.`
    E1003,
    /// Expected a color keyword
    E1004,
    /// Malformed `rgb(R, G, B)` call
    E1005,
    /// `rgb` component greater than 255
    E1006,
    /// Tag name not found in the variable table
    E1007,
    /// `/` not followed by a closable tag name
    E1008,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`,
    /// `explanation()` and here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
    ];

    /// Get the string representation (e.g., "E1002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
        }
    }

    /// Long-form explanation with an example, printed by `ziyy --explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A character inside `<` ... `>` is not part of the tag grammar.\n\
                 Tags may only contain names, numbers, whitespace and `. / ( ) ,`.\n\n\
                 \x20   <b#>bold</b>      # `#` is not allowed\n\n\
                 Write a literal `<` in text as `\\<`."
            }
            ErrorCode::E1001 => {
                "A tag was not closed with `>` right after its body.\n\n\
                 \x20   <b x>        # expected `>` after `b`"
            }
            ErrorCode::E1002 => {
                "A closing tag does not match the innermost open tag.\n\
                 Tags must close in reverse order of opening.\n\n\
                 \x20   <c.red>text</x>   # `x` closes nothing, `c` is open"
            }
            ErrorCode::E1003 => {
                "The color tags `c` (foreground) and `x` (background) take their\n\
                 value after a dot.\n\n\
                 \x20   <c red>      # write <c.red>"
            }
            ErrorCode::E1004 => {
                "Expected one of black, red, green, yellow, blue, magenta, cyan,\n\
                 white or `rgb(R, G, B)`.\n\n\
                 \x20   <c.orange>   # not a color keyword"
            }
            ErrorCode::E1005 => {
                "An `rgb` color takes exactly three comma-separated numbers in\n\
                 parentheses.\n\n\
                 \x20   <c.rgb(0, 150)>   # missing the blue component"
            }
            ErrorCode::E1006 => {
                "Each `rgb` component must be between 0 and 255.\n\n\
                 \x20   <c.rgb(300, 0, 0)>"
            }
            ErrorCode::E1007 => {
                "A bare tag name is looked up in the variable table, and this\n\
                 name has no entry.\n\n\
                 \x20   <foo>text</foo>   # `foo` is not defined"
            }
            ErrorCode::E1008 => {
                "A `/` must be followed by the name of the tag it closes.\n\n\
                 \x20   </ >         # missing tag name"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
