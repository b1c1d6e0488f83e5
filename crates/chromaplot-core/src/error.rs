//! Error type shared by every fallible operation in the core.

use std::io;

/// Errors raised while building, rendering, or exporting a diagram.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("invalid raster dimensions {width}x{height}: both must be > 0")]
    InvalidDimension { width: u32, height: u32 },
    #[error("invalid value range {start}..{end}: end must be greater than start")]
    InvalidRange { start: f32, end: f32 },
    #[error("temperature {0}K is outside the supported range 1667K..=25000K")]
    UnsupportedTemperature(u32),
    #[error("invalid grid step {0}: must be positive and at least one pixel wide")]
    InvalidGridStep(f32),
    #[error("invalid temperature span {start}K..={end}K step {step}K")]
    InvalidTemperatureSpan { start: u32, end: u32, step: u32 },
    #[error("failed to parse diagram config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DiagramError>;
