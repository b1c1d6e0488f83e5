//! Chromaplot Core: CIE 1931 xy chromaticity diagram rendering.
//!
//! This crate contains the chromaticity-to-RGB field renderer, the Planckian
//! locus approximation, overlay drawing, and raster export. No CLI or
//! logging-subscriber dependencies.

pub mod color_management;
pub mod config;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod raster;

// Re-exports for convenience.
pub use color_management::planckian::{TemperatureSpan, locus_point};
pub use config::DiagramConfig;
pub use diagram::render_diagram;
pub use error::{DiagramError, Result};
pub use geometry::{ChromaticityPoint, HalfPlaneConstraint, LineSegment, ValueRange};
pub use raster::Raster;
