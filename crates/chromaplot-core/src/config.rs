//! Central parameter struct that defines a complete diagram render.
//!
//! `DiagramConfig` is the single source of truth for a render: raster size,
//! value range, cut-off lines, background, and the optional overlays. It can
//! be loaded from JSON; missing fields fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagram::field::DEFAULT_BACKGROUND;
use crate::diagram::overlay::{GridConfig, LocusConfig};
use crate::error::{DiagramError, Result};
use crate::geometry::{ChromaticityPoint, LineSegment, ValueRange};

/// Default raster edge length in pixels.
const DEFAULT_SIZE: u32 = 1024;

/// All parameters of a diagram render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Chromaticity span mapped onto both axes.
    pub range: ValueRange,
    /// Lines whose far side (away from white) is cut out of the diagram.
    pub forbidden_segments: Vec<LineSegment>,
    /// Linear fill for restricted and out-of-gamut cells.
    pub background: [f32; 3],
    /// Reference grid; `None` disables it.
    pub grid: Option<GridConfig>,
    /// Planckian locus overlay; `None` disables it.
    pub locus: Option<LocusConfig>,
}

/// Cut-offs for the non-physical region beyond `x + y = 1` and below the
/// line of purples.
pub fn default_forbidden_segments() -> Vec<LineSegment> {
    vec![
        LineSegment::new(ChromaticityPoint::new(0.8, 0.2), ChromaticityPoint::new(0.1, 0.9)),
        LineSegment::new(ChromaticityPoint::new(0.172, 0.0), ChromaticityPoint::new(0.74, 0.26)),
    ]
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            range: ValueRange::default(),
            forbidden_segments: default_forbidden_segments(),
            background: DEFAULT_BACKGROUND,
            grid: Some(GridConfig::default()),
            locus: Some(LocusConfig::default()),
        }
    }
}

impl DiagramConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!("loaded diagram config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything that can be checked before touching a pixel.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DiagramError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.range.validate()?;
        if let Some(grid) = &self.grid {
            grid.pixel_step(&self.range, self.width)?;
            grid.pixel_step(&self.range, self.height)?;
        }
        if let Some(locus) = &self.locus {
            locus.span.validate()?;
        }
        Ok(())
    }
}
