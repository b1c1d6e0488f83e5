use chromaplot_core::DiagramError;

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
