mod args;
mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use alertbox_library::diag::{Sink, StrResult, Warning};
use clap::Parser;
use color_print::ceprintln;
use ecow::eco_format;
use tracing_subscriber::EnvFilter;

use crate::args::CliArguments;

/// Entry point.
fn main() -> ExitCode {
    init_logging();

    let args = CliArguments::parse();
    let mut sink = Sink::new();
    let res = run(&args, &mut sink);

    for warning in sink.into_warnings() {
        print_warning(&warning);
    }

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            print_error(&msg);
            ExitCode::FAILURE
        }
    }
}

/// Render the requested alert and write it out.
fn run(args: &CliArguments, sink: &mut Sink) -> StrResult<()> {
    let config = config::assemble(args, sink)?;
    let markup = alertbox_html::render_with(&config, sink);

    match &args.output {
        Some(path) => std::fs::write(path, markup.as_bytes())
            .map_err(|err| eco_format!("failed to write {} ({err})", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{markup}")
                .and_then(|()| stdout.flush())
                .map_err(|err| eco_format!("failed to write to stdout ({err})"))
        }
    }
}

/// Route `log` records from the libraries to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Print a non-fatal warning to stderr.
fn print_warning(warning: &Warning) {
    ceprintln!("<yellow,bold>warning</>: {}", warning);
}

/// Print an application-level error to stderr.
fn print_error(msg: &str) {
    ceprintln!("<red,bold>error</>: {}", msg);
}
