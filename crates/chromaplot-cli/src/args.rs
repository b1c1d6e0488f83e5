//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use chromaplot_core::ValueRange;
use clap::Parser;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "chromaplot")]
#[command(version, about = "Render a CIE 1931 xy chromaticity diagram", long_about = None)]
pub struct Cli {
    /// Output image; the format follows the extension (ppm, png, ...)
    #[arg(short, long, value_name = "FILE", default_value = "chromatic.ppm")]
    pub output: PathBuf,

    /// JSON diagram config (falls back to $CHROMAPLOT_CONFIG, then built-in defaults)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raster width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Raster height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Chromaticity range mapped onto both axes
    #[arg(long, value_name = "START,END", value_parser = parse_range)]
    pub range: Option<ValueRange>,

    /// Skip the reference grid
    #[arg(long)]
    pub no_grid: bool,

    /// Skip the Planckian locus overlay
    #[arg(long)]
    pub no_locus: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging (overridden by $CHROMAPLOT_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a full argument list, program name first.
pub fn parse<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?)
}

/// Parse a value range in format "START,END"
pub fn parse_range(range_str: &str) -> Result<ValueRange, String> {
    let parts: Vec<&str> = range_str.split(',').collect();
    if parts.len() != 2 {
        return Err(format!(
            "range must be in format START,END (e.g., 0,0.7), got: {range_str}"
        ));
    }

    let start = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid range start: {}", parts[0]))?;
    let end = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid range end: {}", parts[1]))?;

    ValueRange::new(start, end).map_err(|e| e.to_string())
}
