//! The `ziyy` command.
//!
//! Compiles markup given on the command line or in a file and prints the
//! styled result. Errors go to stderr as diagnostics.
//!
//! Exit codes: `0` success, `1` markup error, `2` I/O or usage error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ziyy_diagnostic::emitter::ColorMode;

mod commands;

/// Markup printed when no input is given.
const USAGE: &str = include_str!("help.z");

#[derive(Parser, Debug)]
#[command(name = "ziyy", version, about = "Style terminal text with tag markup")]
struct Args {
    /// Markup to compile
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Do not print the trailing newline
    #[arg(short = 'n', long)]
    no_newline: bool,

    /// Read markup from FILE
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream instead of compiling
    #[arg(short, long)]
    tokens: bool,

    /// Explain an error code, e.g. E1002
    #[arg(long, value_name = "CODE", exclusive = true)]
    explain: Option<String>,

    /// Color of error messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, value_name = "WHEN")]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Install the tree-shaped tracing subscriber when `ZIYY_LOG` is set.
///
/// `ZIYY_LOG` takes an `EnvFilter` directive, e.g. `ZIYY_LOG=ziyy_compile=trace`.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};
    use tracing_tree::HierarchicalLayer;

    if let Ok(filter) = EnvFilter::try_from_env("ZIYY_LOG") {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let color = ColorMode::from(args.color);

    if let Some(code) = &args.explain {
        return commands::explain_error(code);
    }

    let source = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match commands::read_file(path) {
            Ok(source) => source,
            Err(code) => return code,
        },
        (None, None) => return commands::print_usage(USAGE),
    };

    if args.tokens {
        return commands::dump_tokens(&source);
    }
    commands::compile_markup(&source, !args.no_newline, color)
}
