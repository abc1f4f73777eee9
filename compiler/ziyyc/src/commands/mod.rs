//! Command handlers for the `ziyy` binary.
//!
//! Each handler does its own printing and returns the process exit code.
//! Shared helpers like `read_file` live here in the module root.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use ziyy_compile::{compile, CompileError, Variables};
use ziyy_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

mod debug;
mod explain;

pub use debug::dump_tokens;
pub use explain::explain_error;

/// Markup error in the input.
pub(crate) const EXIT_MARKUP_ERROR: u8 = 1;
/// Unreadable input, unwritable output, or bad arguments.
pub(crate) const EXIT_IO_ERROR: u8 = 2;

/// Read a markup file, reporting failures on stderr.
pub fn read_file(path: &Path) -> Result<String, ExitCode> {
    fs::read_to_string(path).map_err(|err| {
        eprintln!("error: cannot read `{}`: {err}", path.display());
        ExitCode::from(EXIT_IO_ERROR)
    })
}

/// Compile `source` to stdout.
pub fn compile_markup(source: &str, newline: bool, color: ColorMode) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = compile(source, &Variables::default(), &mut out).and_then(|()| {
        if newline {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // keep partial output ahead of the diagnostic
            let _ = out.flush();
            drop(out);
            report(&err, source, color)
        }
    }
}

/// Print the built-in usage markup.
pub fn print_usage(usage: &str) -> ExitCode {
    compile_markup(usage, true, ColorMode::Never)
}

fn report(err: &CompileError, source: &str, color: ColorMode) -> ExitCode {
    let Some(diagnostic) = err.to_diagnostic() else {
        eprintln!("error: {err}");
        return ExitCode::from(EXIT_IO_ERROR);
    };
    tracing::debug!(code = %diagnostic.code, "compile failed");

    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty).with_source(source);
    emitter.emit(&diagnostic);
    emitter.emit_summary(1);
    emitter.flush();
    ExitCode::from(EXIT_MARKUP_ERROR)
}
