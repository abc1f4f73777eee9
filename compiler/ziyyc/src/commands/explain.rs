//! `--explain`: long-form documentation for error codes.

use std::process::ExitCode;

use ziyy_diagnostic::ErrorCode;

use super::EXIT_IO_ERROR;

/// Print the explanation of `code_str`.
pub fn explain_error(code_str: &str) -> ExitCode {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        return ExitCode::from(EXIT_IO_ERROR);
    };

    println!("{code}: {}", code.explanation());
    ExitCode::SUCCESS
}
