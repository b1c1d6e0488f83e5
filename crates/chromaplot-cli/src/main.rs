//! Chromaplot renders a CIE 1931 xy chromaticity diagram with the
//! Planckian locus and a reference grid, and writes it to an image file.

mod args;
mod config;
mod error;

use std::process::ExitCode;

use chromaplot_core::render_diagram;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::error::CliError;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "CHROMAPLOT_LOG";

fn init_tracing(verbose: bool) -> Result<(), CliError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let diagram = config::resolve(cli)?;
    if cli.print_config {
        println!("{}", diagram.to_json_pretty()?);
        return Ok(());
    }

    let raster = render_diagram(&diagram)?;
    raster.save(&cli.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match args::parse(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliError::Args(e)) => {
            // Help and version output also arrive here, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
