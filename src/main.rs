//! Cardpress: batch card/label generator.
//!
//! Reads a template SVG and a newline-delimited text file, stamps one copy of
//! the template per line of text, and invokes an external renderer (Inkscape
//! by default) to turn each copy into a PNG or PDF. This is the main entry
//! point for the `cardpress` CLI: it parses arguments, configures logging,
//! runs the pipeline, and maps errors to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod lines;
pub mod pipeline;
pub mod render;
pub mod template;
pub mod workspace;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    match pipeline::run(&cli) {
        Ok(summary) => {
            for artifact in &summary.outputs {
                println!("{}", artifact.display());
            }
            tracing::info!(
                "done: {} line(s), {} file(s) rendered",
                summary.lines,
                summary.rendered
            );
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Configure the global tracing subscriber.
///
/// `--verbose` sets the default level to `debug` (otherwise `info`); an
/// explicit `RUST_LOG` filter always takes precedence. Logs go to stderr.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
