//! Effective diagram configuration: file, environment, then flags.

use std::path::PathBuf;

use chromaplot_core::DiagramConfig;

use crate::args::Cli;
use crate::error::CliError;

/// Environment variable naming a default config file.
const CONFIG_ENV: &str = "CHROMAPLOT_CONFIG";

/// Config file to load: `--config`, else `$CHROMAPLOT_CONFIG`.
fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Build the config for this run and validate it.
pub fn resolve(cli: &Cli) -> Result<DiagramConfig, CliError> {
    let mut config = match config_path(cli) {
        Some(path) => DiagramConfig::from_json_file(&path)?,
        None => DiagramConfig::default(),
    };
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Apply command-line flags on top of a loaded config.
pub fn apply_overrides(config: &mut DiagramConfig, cli: &Cli) {
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(range) = cli.range {
        config.range = range;
    }
    if cli.no_grid {
        config.grid = None;
    }
    if cli.no_locus {
        config.locus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaplot_core::{DiagramError, ValueRange};
    use clap::Parser;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let cli = Cli::try_parse_from(["chromaplot", "--height", "300", "--no-locus"]).unwrap();
        let mut config = DiagramConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 300);
        assert!(config.locus.is_none());
        assert!(config.grid.is_some());
        assert_eq!(config.range, ValueRange::default());
    }

    #[test]
    fn test_resolve_rejects_zero_width() {
        let cli = Cli::try_parse_from(["chromaplot", "--width", "0"]).unwrap();
        assert!(matches!(
            resolve(&cli),
            Err(CliError::Diagram(DiagramError::InvalidDimension { width: 0, .. }))
        ));
    }

    #[test]
    fn test_resolve_reports_missing_config_file() {
        let cli = Cli::try_parse_from(["chromaplot", "--config", "/nonexistent/chromaplot.json"])
            .unwrap();
        assert!(matches!(
            resolve(&cli),
            Err(CliError::Diagram(DiagramError::Io(_)))
        ));
    }
}
