//! Docinc CLI - include directive extraction.
//!
//! Takes a manifest string on the command line, validates that it consists
//! solely of whitespace-separated `@include(path)` directives, and emits the
//! extracted paths as a JSON array on stdout or into a file.

mod emit;
mod error;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docinc_directives::extract;
use error::CliError;
use output::Output;

/// Docinc - extract `@include(path)` directives from a manifest string.
#[derive(Parser)]
#[command(name = "docinc", version, about)]
struct Cli {
    /// Manifest string to parse.
    input: String,

    /// Destination file for the JSON array (default: stdout).
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    // Logs go to stderr; stdout carries only the JSON payload
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli, &output) {
        output.error(&err.to_string());
        std::process::exit(1);
    }
}

/// Extract directives from the parsed invocation and emit them.
///
/// The invocation is resolved into plain values here so the extractor and
/// writer stay free of process-global reads.
fn run(cli: &Cli, output: &Output) -> Result<(), CliError> {
    let directives = extract(&cli.input)?;
    tracing::info!(count = directives.len(), "directives extracted");

    emit::write_json(&directives, cli.output.as_deref())?;

    if let Some(path) = &cli.output {
        output.success(&format!(
            "Wrote {} directive(s) to {}",
            directives.len(),
            path.display()
        ));
    }
    Ok(())
}
