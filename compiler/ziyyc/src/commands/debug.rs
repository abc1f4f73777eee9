//! `--tokens`: print the scanner's output for a source.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::process::ExitCode;

use ziyy_ir::TokenKind;
use ziyy_lexer::Scanner;

use super::EXIT_IO_ERROR;

/// One line per token: line number, the mode it was scanned in, kind, and
/// the source text.
pub(crate) fn format_tokens(source: &str) -> String {
    let mut buf = String::new();
    let mut scanner = Scanner::new(source);
    loop {
        let mode = if scanner.state().is_tag() { "tag" } else { "text" };
        let token = scanner.scan_next();
        if token.is_eof() {
            break;
        }
        let kind = format!("{:?}", token.kind);
        let _ = write!(buf, "{:>4} {mode:<4} {kind:<16} {:?}", token.line, token.text);
        if token.kind == TokenKind::Error {
            let _ = write!(buf, " (error {})", token.error_code);
        }
        buf.push('\n');
    }
    buf
}

pub fn dump_tokens(source: &str) -> ExitCode {
    let mut out = io::stdout().lock();
    match out.write_all(format_tokens(source).as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_IO_ERROR)
        }
    }
}

#[cfg(test)]
mod tests;
